// `trybuild` tests are slow to compile on Windows and the outcome is not
// platform-dependent, so they only run on Linux and macOS.
#[cfg(not(target_os = "windows"))]
#[test]
fn derive_rejects_misuse() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/fail/*.rs");
}
