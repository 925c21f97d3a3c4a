//! Desktop environment detection.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopKind {
    Gnome,
    Kde,
    MacOs,
    Other,
}

pub fn detect_desktop() -> DesktopKind {
    if cfg!(target_os = "macos") {
        return DesktopKind::MacOs;
    }
    match std::env::var_os("XDG_CURRENT_DESKTOP") {
        Some(v) => classify(&v.to_string_lossy()),
        None => DesktopKind::Other,
    }
}

fn classify(desktop: &str) -> DesktopKind {
    // XDG_CURRENT_DESKTOP is a colon-separated list, e.g. "ubuntu:GNOME".
    for part in desktop.split(':') {
        let part = part.to_ascii_uppercase();
        if part.contains("GNOME") {
            return DesktopKind::Gnome;
        }
        if part.contains("KDE") || part.contains("PLASMA") {
            return DesktopKind::Kde;
        }
    }
    DesktopKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_values() {
        assert_eq!(classify("GNOME"), DesktopKind::Gnome);
        assert_eq!(classify("ubuntu:GNOME"), DesktopKind::Gnome);
        assert_eq!(classify("KDE"), DesktopKind::Kde);
        assert_eq!(classify("plasma"), DesktopKind::Kde);
        assert_eq!(classify("sway"), DesktopKind::Other);
    }
}
