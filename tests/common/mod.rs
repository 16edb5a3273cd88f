use assert_fs::TempDir;
use std::fs;

/// Builds a corpus fixture tree:
/// root/
///   data/source/a.xml, b.xml, notes.txt
///   data/ere/a_entities.xml, a_relations.xml, b_events.xml, b_skip.md
pub fn ere_corpus() -> TempDir {
    let td = TempDir::new().unwrap();
    let root = td.path();

    let source_dir = root.join("data").join("source");
    fs::create_dir_all(&source_dir).unwrap();
    fs::write(
        source_dir.join("a.xml"),
        "<doc><post author=\"alice\">Hi there</post></doc>\n",
    )
    .unwrap();
    fs::write(
        source_dir.join("b.xml"),
        "<doc><quote orig_author=\"bob\">So it goes</quote></doc>\n",
    )
    .unwrap();
    // wrong extension, must be excluded from the source listing
    fs::write(source_dir.join("notes.txt"), "not a source document\n").unwrap();

    let ere_dir = root.join("data").join("ere");
    fs::create_dir_all(&ere_dir).unwrap();
    for name in ["a_entities.xml", "a_relations.xml", "b_events.xml"] {
        fs::write(ere_dir.join(name), "<annotations/>\n").unwrap();
    }
    // wrong extension, must be excluded from the annotation listing
    fs::write(ere_dir.join("b_skip.md"), "# not an annotation\n").unwrap();

    td
}
