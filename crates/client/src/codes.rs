//! Firmware selector codes.
//!
//! The numeric codes are fixed by the firmware and must be reproduced
//! exactly; none of them are validated against what a given firmware build
//! actually supports.

/// Notification icon selectors for [`Session::notify`](crate::Session::notify).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotifyIcon {
    #[default]
    Info,
    Warn,
    Blocked,
    Security,
    Settings,
    Files,
    ProfileRobot,
    Profile,
    GameDisc,
    Disc,
    DvdDisc,
    BlurayDisc,
    CdDisc,
    Media,
    Music,
    Photos,
    Videos,
    Games,
    MessageBox,
    NewMessage,
    Refresh,
    RemotePlay,
    Clock,
    GameInstall,
    Trophy1,
    Trophy2,
    Trophy3,
    Trophy4,
    /// Same firmware code as [`Trophy4`](Self::Trophy4).
    TrophyPlatinum,
    PsnFriend,
    PsnYellow,
    PsnBlue,
    SignQuestionMark,
    SignX,
    /// Same firmware code as [`SignX`](Self::SignX).
    SignBlocked,
    SignNew,
    SignCheckmark,
    SignWarning,
    SignSettings,
    SignTrophy,
    SignStore,
    SignLoading,
    CursorPalm,
    CursorDrag,
    Cursor,
    CursorPen,
    Play,
    Pause,
    Headphones,
    Keyboard,
}

impl NotifyIcon {
    pub fn code(self) -> u8 {
        match self {
            Self::Info => 0,
            Self::PsnFriend => 1,
            Self::Headphones => 2,
            Self::Warn => 3,
            Self::Keyboard => 4,
            Self::Blocked => 7,
            Self::Settings => 8,
            Self::Trophy1 => 9,
            Self::Trophy2 => 10,
            Self::Trophy3 => 11,
            Self::Trophy4 | Self::TrophyPlatinum => 12,
            Self::CursorPalm => 13,
            Self::CursorPen => 14,
            Self::Cursor => 15,
            Self::CursorDrag => 16,
            Self::Play => 17,
            Self::Pause => 18,
            Self::PsnYellow => 19,
            Self::PsnBlue => 20,
            Self::SignNew => 21,
            Self::SignCheckmark => 22,
            Self::SignWarning => 23,
            Self::SignSettings => 24,
            Self::SignTrophy => 25,
            Self::SignStore => 26,
            Self::Files => 27,
            Self::ProfileRobot => 28,
            Self::SignLoading => 29,
            Self::Music => 30,
            Self::Photos => 31,
            Self::Videos => 32,
            Self::Games => 33,
            Self::Security => 34,
            Self::SignX | Self::SignBlocked => 35,
            Self::MessageBox => 36,
            Self::NewMessage => 38,
            Self::Refresh => 39,
            Self::Profile => 40,
            Self::GameDisc => 41,
            Self::Disc => 42,
            Self::BlurayDisc => 43,
            Self::CdDisc => 44,
            Self::Media => 45,
            Self::DvdDisc => 46,
            Self::SignQuestionMark => 47,
            Self::RemotePlay => 48,
            Self::Clock => 49,
            Self::GameInstall => 50,
        }
    }
}

/// Buzzer sound selectors.
///
/// [`NoSound`](Self::NoSound) has no firmware code: it encodes "skip the
/// request entirely", not "send zero".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Buzzer {
    NoSound,
    Simple,
    Double,
    Triple,
    Cancel,
    Trophy,
    Decide,
    Option,
    SystemOk,
    SystemNg,
}

impl Buzzer {
    pub fn code(self) -> Option<u8> {
        match self {
            Self::NoSound => None,
            Self::Cancel => Some(0),
            Self::Simple => Some(1),
            Self::Double => Some(2),
            Self::Triple => Some(3),
            Self::Trophy => Some(5),
            Self::Decide => Some(6),
            Self::Option => Some(7),
            Self::SystemOk => Some(8),
            Self::SystemNg => Some(9),
        }
    }
}

/// Power LED color selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedColor {
    Red,
    Green,
    Yellow,
}

impl LedColor {
    pub fn code(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Yellow => 2,
        }
    }
}

/// Power LED mode selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedMode {
    Off,
    On,
    Blink,
}

impl LedMode {
    pub fn code(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
            Self::Blink => 2,
        }
    }
}
