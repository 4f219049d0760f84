use clausewitz_core::parser::Parser;
use miette::Report;
use std::fs;

#[test]
fn test_all_fixture_scripts_parse() {
    let scripts_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/scripts");
    let entries = fs::read_dir(scripts_dir).expect("Failed to read scripts directory");

    let mut seen = 0;
    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            println!("Parsing file: {:?}", path);
            let source = fs::read_to_string(&path)
                .unwrap_or_else(|_| panic!("Failed to read file: {:?}", path));

            let mut parser = Parser::new_with_name(&source, path.to_string_lossy())
                .unwrap_or_else(|err| panic!("Lexer failed on {:?}: {:#?}", path, Report::new(err)));

            if let Err(err) = parser.parse_document() {
                panic!("Failed to parse {:?}. Error: {:#?}", path, Report::new(err));
            }
            seen += 1;
        }
    }
    assert!(seen > 0, "no fixture scripts found in {scripts_dir}");
}
