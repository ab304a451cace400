//! Module catalog: the closed set of feature areas and their metadata.
//!
//! Every feature area of the application ("module") is identified by a
//! [`ModuleId`] and described by exactly one [`ModuleDefinition`] in the
//! compiled-in [`MODULES`] table. The table is immutable, process-wide data;
//! nothing mutates it at runtime.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Identifier of a feature area.
///
/// The enumeration is closed: an id outside this set is unrepresentable
/// inside the process. Strings arriving over the wire are parsed with
/// [`std::str::FromStr`] and fail fast on unknown values.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ModuleId {
    Dashboard,
    Users,
    Announcements,
    Events,
    Tasks,
    Messages,
    AskImam,
    Requests,
    Shop,
    Vaktija,
    Finances,
    Projects,
    Activity,
    Badges,
    Points,
    Certificates,
    Documents,
    Media,
    Settings,
    Guide,
}

/// Coarse classification of a module. Presentation only, never used for
/// access control.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModuleCategory {
    Core,
    Communication,
    Management,
    Financial,
    Content,
}

/// Display, routing, and authorization metadata for a single module.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDefinition {
    pub id: ModuleId,
    /// Display name.
    pub name: &'static str,
    /// i18n translation key.
    pub name_key: &'static str,
    pub description: &'static str,
    /// Icon identifier.
    pub icon: &'static str,
    /// Frontend route path.
    pub route: &'static str,
    /// Requires login.
    pub requires_auth: bool,
    /// Role slugs that further restrict visibility even when a tier enables
    /// the module. Empty means no role requirement.
    pub required_roles: &'static [&'static str],
    pub category: ModuleCategory,
}

impl ModuleId {
    /// Looks up the definition for this module in the catalog.
    ///
    /// Total over the enumeration; there is no failure case.
    #[must_use]
    pub fn definition(self) -> &'static ModuleDefinition {
        &MODULES[self as usize]
    }

    /// The single-bit [`ModuleSet`] for this module.
    #[must_use]
    pub const fn flag(self) -> ModuleSet {
        ModuleSet::from_bits_truncate(1 << self as u32)
    }
}

bitflags! {
    /// Represents a set of modules.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ModuleSet: u32 {
        const DASHBOARD = 1 << 0;
        const USERS = 1 << 1;
        const ANNOUNCEMENTS = 1 << 2;
        const EVENTS = 1 << 3;
        const TASKS = 1 << 4;
        const MESSAGES = 1 << 5;
        const ASK_IMAM = 1 << 6;
        const REQUESTS = 1 << 7;
        const SHOP = 1 << 8;
        const VAKTIJA = 1 << 9;
        const FINANCES = 1 << 10;
        const PROJECTS = 1 << 11;
        const ACTIVITY = 1 << 12;
        const BADGES = 1 << 13;
        const POINTS = 1 << 14;
        const CERTIFICATES = 1 << 15;
        const DOCUMENTS = 1 << 16;
        const MEDIA = 1 << 17;
        const SETTINGS = 1 << 18;
        const GUIDE = 1 << 19;

        const ALL = u32::MAX >> (u32::BITS - 20);
    }
}

impl ModuleSet {
    /// Whether the set contains the given module.
    #[must_use]
    pub const fn contains_id(self, module: ModuleId) -> bool {
        self.contains(module.flag())
    }

    /// Iterates the module ids contained in this set, in catalog order.
    pub fn ids(self) -> impl Iterator<Item = ModuleId> {
        ModuleId::iter().filter(move |m| self.contains_id(*m))
    }
}

impl From<ModuleId> for ModuleSet {
    fn from(module: ModuleId) -> Self {
        module.flag()
    }
}

impl From<u32> for ModuleSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for ModuleSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for ModuleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

/// Complete definition of every module.
///
/// Order must match the [`ModuleId`] discriminants; `ModuleId::definition`
/// indexes into this table.
pub static MODULES: [ModuleDefinition; 20] = [
    ModuleDefinition {
        id: ModuleId::Dashboard,
        name: "Dashboard",
        name_key: "navigation.dashboard",
        description: "Pregled aktivnosti i statistika",
        icon: "Home",
        route: "/dashboard",
        requires_auth: true,
        required_roles: &[],
        category: ModuleCategory::Core,
    },
    ModuleDefinition {
        id: ModuleId::Users,
        name: "Korisnici",
        name_key: "navigation.users",
        description: "Upravljanje članovima džemata",
        icon: "Users",
        route: "/users",
        requires_auth: true,
        required_roles: &[crate::constants::ROLE_ADMIN],
        category: ModuleCategory::Management,
    },
    ModuleDefinition {
        id: ModuleId::Announcements,
        name: "Obavještenja",
        name_key: "navigation.announcements",
        description: "Objave i vijesti",
        icon: "Bell",
        route: "/announcements",
        // Public content
        requires_auth: false,
        required_roles: &[],
        category: ModuleCategory::Communication,
    },
    ModuleDefinition {
        id: ModuleId::Events,
        name: "Događaji",
        name_key: "navigation.events",
        description: "Kalendar događaja i važni datumi",
        icon: "Calendar",
        route: "/events",
        // Public content
        requires_auth: false,
        required_roles: &[],
        category: ModuleCategory::Core,
    },
    ModuleDefinition {
        id: ModuleId::Tasks,
        name: "Sekcije",
        name_key: "navigation.workgroups",
        description: "Radne grupe i zadaci",
        icon: "Briefcase",
        route: "/work-groups",
        requires_auth: true,
        required_roles: &[],
        category: ModuleCategory::Management,
    },
    ModuleDefinition {
        id: ModuleId::Messages,
        name: "Poruke",
        name_key: "navigation.messages",
        description: "Interna komunikacija",
        icon: "Mail",
        route: "/messages",
        requires_auth: true,
        required_roles: &[],
        category: ModuleCategory::Communication,
    },
    ModuleDefinition {
        id: ModuleId::AskImam,
        name: "Pitaj Imama",
        name_key: "navigation.askImam",
        description: "Postavi pitanje imamu",
        icon: "HelpCircle",
        route: "/ask-imam",
        requires_auth: true,
        required_roles: &[],
        category: ModuleCategory::Communication,
    },
    ModuleDefinition {
        id: ModuleId::Requests,
        name: "Zahtjevi",
        name_key: "navigation.requests",
        description: "Pristupnice, vjenčanja, akika",
        icon: "FileText",
        route: "/requests",
        // Guest can submit
        requires_auth: false,
        required_roles: &[],
        category: ModuleCategory::Management,
    },
    ModuleDefinition {
        id: ModuleId::Shop,
        name: "Trgovina",
        name_key: "navigation.shop",
        description: "DžematShop i marketplace",
        icon: "ShoppingBag",
        route: "/shop",
        requires_auth: true,
        required_roles: &[],
        category: ModuleCategory::Content,
    },
    ModuleDefinition {
        id: ModuleId::Vaktija,
        name: "Vaktija",
        name_key: "navigation.vaktija",
        description: "Kalendar vaktija",
        icon: "Clock",
        route: "/vaktija",
        // Public content
        requires_auth: false,
        required_roles: &[],
        category: ModuleCategory::Core,
    },
    ModuleDefinition {
        id: ModuleId::Finances,
        name: "Finansije",
        name_key: "navigation.finances",
        description: "Donacije i finansijski izvještaji",
        icon: "DollarSign",
        route: "/finances",
        requires_auth: true,
        required_roles: &[crate::constants::ROLE_ADMIN, crate::constants::ROLE_BOARD],
        category: ModuleCategory::Financial,
    },
    ModuleDefinition {
        id: ModuleId::Projects,
        name: "Projekti",
        name_key: "navigation.projects",
        description: "Upravljanje projektima džemata",
        icon: "Target",
        route: "/projects",
        requires_auth: true,
        required_roles: &[crate::constants::ROLE_ADMIN, crate::constants::ROLE_BOARD],
        category: ModuleCategory::Financial,
    },
    ModuleDefinition {
        id: ModuleId::Activity,
        name: "Aktivnost",
        name_key: "navigation.activity",
        description: "Feed aktivnosti",
        icon: "Activity",
        route: "/activity",
        // Public content
        requires_auth: false,
        required_roles: &[],
        category: ModuleCategory::Core,
    },
    ModuleDefinition {
        id: ModuleId::Badges,
        name: "Značke",
        name_key: "navigation.badges",
        description: "Sistem priznanja",
        icon: "Award",
        route: "/badges",
        requires_auth: true,
        required_roles: &[],
        category: ModuleCategory::Content,
    },
    ModuleDefinition {
        id: ModuleId::Points,
        name: "Poeni",
        name_key: "navigation.points",
        description: "Bodovni sistem",
        icon: "TrendingUp",
        route: "/points",
        requires_auth: true,
        required_roles: &[],
        category: ModuleCategory::Content,
    },
    ModuleDefinition {
        id: ModuleId::Certificates,
        name: "Potvrde",
        name_key: "navigation.certificates",
        description: "Zahvale i certifikati",
        icon: "Award",
        route: "/certificates",
        requires_auth: true,
        required_roles: &[],
        category: ModuleCategory::Content,
    },
    ModuleDefinition {
        id: ModuleId::Documents,
        name: "Dokumenti",
        name_key: "navigation.documents",
        description: "Dokumentacija džemata",
        icon: "FileText",
        route: "/documents",
        requires_auth: true,
        required_roles: &[],
        category: ModuleCategory::Content,
    },
    ModuleDefinition {
        id: ModuleId::Media,
        name: "Media",
        name_key: "navigation.media",
        description: "Livestream i medijski sadržaj",
        icon: "Video",
        route: "/media",
        // Public livestream
        requires_auth: false,
        required_roles: &[],
        category: ModuleCategory::Content,
    },
    ModuleDefinition {
        id: ModuleId::Settings,
        name: "Podešavanja",
        name_key: "navigation.settings",
        description: "Konfiguracija sistema",
        icon: "Settings",
        route: "/settings",
        requires_auth: true,
        required_roles: &[crate::constants::ROLE_ADMIN],
        category: ModuleCategory::Core,
    },
    ModuleDefinition {
        id: ModuleId::Guide,
        name: "Vodič",
        name_key: "navigation.guide",
        description: "Uputstva za korištenje",
        icon: "Book",
        route: "/guide",
        // Public help
        requires_auth: false,
        required_roles: &[],
        category: ModuleCategory::Core,
    },
];
