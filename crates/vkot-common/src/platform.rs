/// Window-system and OS integrations whose entry points only exist when the
/// matching platform is compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Xlib,
    Xcb,
    Wayland,
    Win32,
    Android,
    MacOs,
    Ios,
    Metal,
}

impl Platform {
    pub const ALL: [Platform; 8] = [
        Platform::Xlib,
        Platform::Xcb,
        Platform::Wayland,
        Platform::Win32,
        Platform::Android,
        Platform::MacOs,
        Platform::Ios,
        Platform::Metal,
    ];

    /// Whether entry points tagged with this platform are available in this build.
    pub fn is_enabled(self) -> bool {
        match self {
            Platform::Xlib | Platform::Xcb | Platform::Wayland => cfg!(all(
                unix,
                not(target_os = "android"),
                not(target_os = "macos"),
                not(target_os = "ios")
            )),
            Platform::Win32 => cfg!(target_os = "windows"),
            Platform::Android => cfg!(target_os = "android"),
            Platform::MacOs => cfg!(target_os = "macos"),
            Platform::Ios => cfg!(target_os = "ios"),
            Platform::Metal => cfg!(any(target_os = "macos", target_os = "ios")),
        }
    }

    /// Platforms compiled into this build.
    pub fn enabled() -> impl Iterator<Item = Platform> {
        Self::ALL.into_iter().filter(|p| p.is_enabled())
    }
}
