//! Minimal `.docx` builder and reader for exercising template filling.

use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use regex::Regex;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

/// The eight placeholders the template carries.
pub(crate) const PLACEHOLDERS: [&str; 8] = [
    "[Replace with input Name]",
    "[Replace with input Date]",
    "[Replace with input Time]",
    "[Replace with input Sessions]",
    "[Replace with output of Presenting Problem(s): ]",
    "[Replace with output of Assessment:]",
    "[Replace with output of Intervention: ]",
    "[Replace with output of Plan:]",
];

/// Build a `.docx` whose body has one paragraph per entry. The `Name:` line
/// splits its placeholder across two differently formatted runs.
pub(crate) fn progress_note_template() -> Vec<u8> {
    let mut body = String::from(concat!(
        r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:rPr><w:b/></w:rPr><w:t>Progress Note</w:t></w:r></w:p>"#,
        r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">Name: [Replace with </w:t></w:r>"#,
        r#"<w:r><w:t>input Name]</w:t></w:r></w:p>"#,
    ));
    for (label, placeholder) in [
        ("Date", PLACEHOLDERS[1]),
        ("Time", PLACEHOLDERS[2]),
        ("Session", PLACEHOLDERS[3]),
        ("Presenting Problem(s)", PLACEHOLDERS[4]),
        ("Assessment", PLACEHOLDERS[5]),
        ("Intervention", PLACEHOLDERS[6]),
        ("Plan", PLACEHOLDERS[7]),
    ] {
        body.push_str(&format!(
            r#"<w:p><w:r><w:t xml:space="preserve">{}: {}</w:t></w:r></w:p>"#,
            label, placeholder
        ));
    }
    document(&body)
}

fn document(body: &str) -> Vec<u8> {
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}<w:sectPr/></w:body></w:document>"#,
        body
    );
    let parts = [
        (
            "[Content_Types].xml",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#,
        ),
        (
            "_rels/.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#,
        ),
        ("word/document.xml", xml.as_str()),
    ];

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer.start_file(name, FileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Text of each paragraph in the document part.
pub(crate) fn paragraph_texts(path: &Path) -> Vec<String> {
    let mut archive = ZipArchive::new(fs::File::open(path).unwrap()).unwrap();
    let mut xml = String::new();
    archive.by_name("word/document.xml").unwrap().read_to_string(&mut xml).unwrap();

    let paragraph = Regex::new(r"(?s)<w:p(?:\s[^>]*)?>(.*?)</w:p>").unwrap();
    let text = Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>").unwrap();
    paragraph
        .captures_iter(&xml)
        .map(|p| {
            text.captures_iter(&p[1])
                .map(|t| t[1].replace("&amp;", "&").replace("&lt;", "<").replace("&gt;", ">"))
                .collect::<String>()
        })
        .collect()
}
