use crate::config;
use crate::geo::LatLng;

/// A campus building that attendance can be recorded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Building {
    Sc,
    Ba,
    Lab,
}

impl Building {
    pub const ALL: [Building; 3] = [Building::Sc, Building::Ba, Building::Lab];

    pub fn id(self) -> &'static str {
        match self {
            Self::Sc => "SC",
            Self::Ba => "BA",
            Self::Lab => "Lab",
        }
    }

    pub fn coordinates(self) -> LatLng {
        match self {
            Self::Sc => config::SC_COORDS,
            Self::Ba => config::BA_COORDS,
            Self::Lab => config::LAB_COORDS,
        }
    }

    /// Registry key used for markers placed by a button press.
    pub fn marker_label(self) -> String {
        format!("{} building", self.id())
    }

    /// Prefix of the on-page counter text.
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Sc => "SC Building Attendance",
            Self::Ba => "BA Building Attendance",
            Self::Lab => "CCS Laboratory Attendance",
        }
    }

    pub fn button_element_id(self) -> &'static str {
        match self {
            Self::Sc => config::SC_BUTTON_ID,
            Self::Ba => config::BA_BUTTON_ID,
            Self::Lab => config::LAB_BUTTON_ID,
        }
    }

    pub fn display_element_id(self) -> &'static str {
        match self {
            Self::Sc => config::SC_DISPLAY_ID,
            Self::Ba => config::BA_DISPLAY_ID,
            Self::Lab => config::LAB_DISPLAY_ID,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Sc => 0,
            Self::Ba => 1,
            Self::Lab => 2,
        }
    }
}
