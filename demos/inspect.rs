use clausewitz_core::{parse, stringify, StringifyOptions, Value};

fn main() {
    let script = r#"
scenario = {
    name = "Frontier"
    system = { id = "0" }
    system = { id = "1" }
}
"#;

    match parse(script) {
        Ok(mut doc) => {
            println!("name: {:?}", doc.get("scenario.name"));
            println!("systems: {}", doc.get_all("scenario.system").len());

            doc.add("scenario", "seed", Value::Integer(42));
            doc.remove_all("scenario", "system");

            let options = StringifyOptions {
                indent_spaces: Some(4),
                blank_lines: false,
            };
            println!("---\n{}", stringify(&doc, &options));
        }
        Err(e) => {
            eprintln!("Failed to parse script: {e:?}");
        }
    }
}
