use htmlrefs::{escape, parse_entity, replace_entities};

fn main() {
    println!("Testing htmlrefs functionality...");

    let decode_tests = [
        ("Fish &amp; Chips", "Named references"),
        ("&#x27E8;x, y&#x27E9;", "Hex references"),
        ("&#169; 2024", "Decimal reference"),
        ("&copy &MadeUpEntity; a&", "Nothing to decode"),
        ("&#98765432;", "Invalid code point"),
    ];

    println!("\n=== Entity Substitution ===");
    for &(input, description) in &decode_tests {
        println!("{}: {} -> {}", description, input, replace_entities(input));
    }

    println!("\n=== Single Reference Parsing ===");
    for input in ["&quot;", "&#34;", "&#x22;", "&unknown;", "&#x000000001;"] {
        let (text, consumed) = parse_entity(input);
        println!("{} -> ({:?}, {} bytes)", input, text, consumed);
    }

    let escape_tests = [
        ("<a href=\"?q=a&b\">link</a>", "Markup"),
        ("plain text", "Nothing to escape"),
        ("&amp;", "Already escaped (double-escapes)"),
    ];

    println!("\n=== Escaping ===");
    for &(input, description) in &escape_tests {
        println!("{}: {} -> {}", description, input, escape(input));
    }
}
