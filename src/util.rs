/// Quote `s` as a Lua string literal. Control characters use three-digit
/// decimal escapes so a following digit can't extend them.
pub fn lua_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                out.push_str(&format!("\\{:03}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Print `msg` to stderr and exit with status 1
pub fn die(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}
