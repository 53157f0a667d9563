//! Tab identifiers for the TUI application. The active tab is the active
//! scenario family.

use funnelroi_core::ScenarioFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Cro,
    Redesign,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Cro, TabId::Redesign];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Cro => "CRO Program",
            TabId::Redesign => "Site Redesign",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Cro => 0,
            TabId::Redesign => 1,
        }
    }

    pub fn family(&self) -> ScenarioFamily {
        match self {
            TabId::Cro => ScenarioFamily::Cro,
            TabId::Redesign => ScenarioFamily::Redesign,
        }
    }

    pub fn from_family(family: ScenarioFamily) -> Self {
        match family {
            ScenarioFamily::Cro => TabId::Cro,
            ScenarioFamily::Redesign => TabId::Redesign,
        }
    }
}
