use bug_crossing::terminal::TerminalGuard;

/// Show-cursor and leave-alternate-screen sequences.
const SHOW_CURSOR: &str = "\x1b[?25h";
const LEAVE_ALT_SCREEN: &str = "\x1b[?1049l";

#[test]
fn dropping_the_guard_restores_the_screen() {
    let mut buf: Vec<u8> = Vec::new();
    {
        let _term = TerminalGuard::new(&mut buf);
    }
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains(SHOW_CURSOR));
    assert!(out.contains(LEAVE_ALT_SCREEN));
}

#[test]
fn early_return_still_restores_the_screen() {
    fn session(buf: &mut Vec<u8>) -> std::io::Result<()> {
        let mut term = TerminalGuard::new(buf);
        term.writer().extend_from_slice(b"frame");
        Err(std::io::Error::new(std::io::ErrorKind::Other, "setup failed"))
    }

    let mut buf: Vec<u8> = Vec::new();
    assert!(session(&mut buf).is_err());
    let out = String::from_utf8(buf).unwrap();
    assert!(out.starts_with("frame"));
    assert!(out.ends_with(LEAVE_ALT_SCREEN));
}
