//! Text templates for generated code and the stamper that fills them
//!
//! Templates use `{key}` placeholders. `{{` and `}}` produce literal braces.
//! A placeholder with no matching field is left in the output untouched.

/// Placeholder test for one opcode variant
pub const TEST_STUB: Template = Template(
    "#[test]
fn opcode_0x{code}_{mode}_{name}() {{
    let cpu = execute_nsteps(|_| {{}}, &[], 0x8000, 0);
    assert_eq!(2 + 2, 5);
}}
",
);

/// One entry of the static opcode table
pub const TABLE_ENTRY: Template = Template(
    "({code}, Opcode::new({code}, {size}, {tick}, \"{name}\", AddressingMode::{mode}, {modifier})),",
);

/// Match arm routing every opcode of a mnemonic to its handler
pub const DISPATCH_ARM: Template = Template("{codes} => self.{name}(&opcode)");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(pub &'static str);

impl Template {
    /// Fill the placeholders of this template from `fields`
    pub fn stamp(&self, fields: &[(&str, &str)]) -> String {
        let text = self.0;
        let mut out = String::with_capacity(text.len() + 32);
        let mut rest = text;

        while let Some(pos) = rest.find(['{', '}']) {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if tail.starts_with("{{") {
                out.push('{');
                rest = &tail[2..];
            } else if tail.starts_with("}}") {
                out.push('}');
                rest = &tail[2..];
            } else if tail.starts_with('{') {
                match tail.find('}') {
                    Some(end) => {
                        let key = &tail[1..end];
                        match fields.iter().find(|(k, _)| *k == key) {
                            Some((_, value)) => out.push_str(value),
                            None => out.push_str(&tail[..=end]),
                        }
                        rest = &tail[end + 1..];
                    }
                    None => {
                        out.push_str(tail);
                        rest = "";
                    }
                }
            } else {
                out.push('}');
                rest = &tail[1..];
            }
        }

        out.push_str(rest);
        out
    }
}
