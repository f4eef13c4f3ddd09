//! Converter Module Tests
//!
//! Validates the structural recursion, order preservation, text fidelity,
//! and the per-document failure isolation of batch mode.
//!
//! ## Test Scopes
//! - **Parser**: Five-level nesting, name resolution, malformed attributes.
//! - **Text**: Byte-identical round-trips, escapes, empty verses.
//! - **Batch**: Isolation of one bad document and reproducible output.

#[cfg(test)]
mod tests {
    use quick_xml::Reader;

    use crate::convert::batch::convert_directory;
    use crate::convert::parser::{convert_document, ConvertError};
    use crate::corpus::types::CorpusDocument;

    fn convert_str(xml: &str) -> Result<CorpusDocument, ConvertError> {
        let mut reader = Reader::from_str(xml);
        convert_document(&mut reader)
    }

    const SAMPLE: &str = r#"<bible name="Sample Version" abbreviation="SV" language="English">
  <testament name="Old Testament">
    <book number="1">
      <chapter number="1">
        <verse number="1">In the beginning</verse>
        <verse number="2">And the earth</verse>
      </chapter>
      <chapter number="2">
        <verse number="1">Thus the heavens</verse>
      </chapter>
    </book>
  </testament>
  <testament name="New Testament">
    <book number="40" abbrev="MAT">
      <chapter number="1">
        <verse number="1">The book of the generation</verse>
      </chapter>
    </book>
  </testament>
</bible>"#;

    // ============================================================
    // PARSER TESTS - structure
    // ============================================================

    #[test]
    fn test_convert_full_structure() {
        let doc = convert_str(SAMPLE).expect("Conversion failed");

        assert_eq!(doc.name, "Sample Version");
        assert_eq!(doc.abbreviation, "SV");
        assert_eq!(doc.language, "English");
        assert_eq!(doc.divisions.len(), 2);

        let old = &doc.divisions[0];
        assert_eq!(old.name, "Old Testament");
        assert_eq!(old.books.len(), 1);
        assert_eq!(old.books[0].ordinal, 1);
        assert_eq!(old.books[0].name, "Genesis");
        assert_eq!(old.books[0].chapters.len(), 2);
        assert_eq!(old.books[0].chapters[0].verses.len(), 2);
        assert_eq!(old.books[0].chapters[1].verses[0].text, "Thus the heavens");

        let new = &doc.divisions[1];
        assert_eq!(new.books[0].name, "Matthew");
        assert_eq!(new.books[0].abbreviation.as_deref(), Some("MAT"));
    }

    #[test]
    fn test_convert_resolves_name_from_ordinal_not_source() {
        // Source carries no name on book nodes; the table supplies it.
        let doc = convert_str(SAMPLE).unwrap();
        assert_eq!(doc.divisions[0].books[0].name, "Genesis");
    }

    #[test]
    fn test_convert_ordinal_outside_table_gets_synthetic_name() {
        let xml = r#"<bible name="X" abbreviation="X" language="en">
            <testament name="Apocrypha">
                <book number="67"><chapter number="1"><verse number="1">text</verse></chapter></book>
            </testament>
        </bible>"#;

        let doc = convert_str(xml).unwrap();
        assert_eq!(doc.divisions[0].books[0].name, "Book 67");
    }

    #[test]
    fn test_convert_preserves_document_order_over_declared_numbers() {
        // Verse numbers are misordered on purpose; output must follow
        // document order, not numeric order.
        let xml = r#"<bible name="X" abbreviation="X" language="en">
            <testament name="T">
                <book number="1">
                    <chapter number="1">
                        <verse number="3">third declared</verse>
                        <verse number="1">first declared</verse>
                        <verse number="2">second declared</verse>
                    </chapter>
                </book>
            </testament>
        </bible>"#;

        let doc = convert_str(xml).unwrap();
        let verses = &doc.divisions[0].books[0].chapters[0].verses;

        assert_eq!(verses[0].number, 3);
        assert_eq!(verses[0].text, "third declared");
        assert_eq!(verses[1].number, 1);
        assert_eq!(verses[2].number, 2);
    }

    #[test]
    fn test_convert_missing_root_attributes_default_to_empty() {
        let xml = r#"<bible><testament name="T"/></bible>"#;

        let doc = convert_str(xml).unwrap();
        assert_eq!(doc.name, "");
        assert_eq!(doc.abbreviation, "");
        assert_eq!(doc.language, "");
        assert_eq!(doc.divisions.len(), 1);
    }

    // ============================================================
    // PARSER TESTS - text fidelity
    // ============================================================

    #[test]
    fn test_convert_verse_text_is_byte_identical() {
        let xml = "<bible name=\"X\" abbreviation=\"X\" language=\"en\"><testament name=\"T\"><book number=\"1\"><chapter number=\"1\"><verse number=\"1\">  spaced,  unpolished text </verse></chapter></book></testament></bible>";

        let doc = convert_str(xml).unwrap();
        assert_eq!(
            doc.divisions[0].books[0].chapters[0].verses[0].text,
            "  spaced,  unpolished text "
        );
    }

    #[test]
    fn test_convert_unescapes_entities() {
        let xml = "<bible name=\"X\" abbreviation=\"X\" language=\"en\"><testament name=\"T\"><book number=\"1\"><chapter number=\"1\"><verse number=\"1\">mercy &amp; truth &lt;endure&gt;</verse></chapter></book></testament></bible>";

        let doc = convert_str(xml).unwrap();
        assert_eq!(
            doc.divisions[0].books[0].chapters[0].verses[0].text,
            "mercy & truth <endure>"
        );
    }

    #[test]
    fn test_convert_self_closing_verse_has_empty_text() {
        let xml = r#"<bible name="X" abbreviation="X" language="en">
            <testament name="T">
                <book number="1"><chapter number="1"><verse number="1"/></chapter></book>
            </testament>
        </bible>"#;

        let doc = convert_str(xml).unwrap();
        assert_eq!(doc.divisions[0].books[0].chapters[0].verses[0].text, "");
    }

    #[test]
    fn test_convert_empty_verse_element_has_empty_text() {
        let xml = r#"<bible name="X" abbreviation="X" language="en">
            <testament name="T">
                <book number="1"><chapter number="1"><verse number="1"></verse></chapter></book>
            </testament>
        </bible>"#;

        let doc = convert_str(xml).unwrap();
        assert_eq!(doc.divisions[0].books[0].chapters[0].verses[0].text, "");
    }

    // ============================================================
    // PARSER TESTS - malformed nodes
    // ============================================================

    #[test]
    fn test_convert_non_numeric_chapter_number_fails() {
        let xml = r#"<bible name="X" abbreviation="X" language="en">
            <testament name="T">
                <book number="1"><chapter number="one"><verse number="1">text</verse></chapter></book>
            </testament>
        </bible>"#;

        let err = convert_str(xml).unwrap_err();
        match err {
            ConvertError::MalformedNode { node, attribute } => {
                assert_eq!(node, "chapter");
                assert_eq!(attribute, "number");
            }
            other => panic!("Expected MalformedNode, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_missing_verse_number_fails() {
        let xml = r#"<bible name="X" abbreviation="X" language="en">
            <testament name="T">
                <book number="1"><chapter number="1"><verse>text</verse></chapter></book>
            </testament>
        </bible>"#;

        let err = convert_str(xml).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MalformedNode {
                node: "verse",
                attribute: "number"
            }
        ));
    }

    #[test]
    fn test_convert_empty_input_fails() {
        assert!(convert_str("").is_err());
    }

    // ============================================================
    // BATCH TESTS - failure isolation
    // ============================================================

    #[test]
    fn test_batch_one_bad_document_does_not_abort_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("xml_files");
        let output = dir.path().join("json_files");
        std::fs::create_dir_all(&input).unwrap();

        std::fs::write(input.join("good.xml"), SAMPLE).unwrap();
        std::fs::write(
            input.join("bad.xml"),
            r#"<bible name="B" abbreviation="B" language="en">
                <testament name="T"><book number="oops"/></testament>
            </bible>"#,
        )
        .unwrap();

        let summary = convert_directory(&input, &output).expect("Batch failed");

        assert_eq!(summary.converted, 1);
        assert_eq!(summary.failed, 1);
        assert!(output.join("good.json").exists());
        assert!(!output.join("bad.json").exists());
    }

    #[test]
    fn test_batch_output_round_trips_through_the_model() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("xml_files");
        let output = dir.path().join("json_files");
        std::fs::create_dir_all(&input).unwrap();
        std::fs::write(input.join("sample.xml"), SAMPLE).unwrap();

        convert_directory(&input, &output).unwrap();

        let json = std::fs::read_to_string(output.join("sample.json")).unwrap();
        let doc: CorpusDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(
            doc.divisions[0].books[0].chapters[0].verses[0].text,
            "In the beginning"
        );
    }

    #[test]
    fn test_batch_rerun_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("xml_files");
        let output = dir.path().join("json_files");
        std::fs::create_dir_all(&input).unwrap();
        std::fs::write(input.join("sample.xml"), SAMPLE).unwrap();

        convert_directory(&input, &output).unwrap();
        let first = std::fs::read_to_string(output.join("sample.json")).unwrap();

        convert_directory(&input, &output).unwrap();
        let second = std::fs::read_to_string(output.join("sample.json")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_batch_ignores_non_xml_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("xml_files");
        let output = dir.path().join("json_files");
        std::fs::create_dir_all(&input).unwrap();
        std::fs::write(input.join("readme.txt"), "not a corpus").unwrap();

        let summary = convert_directory(&input, &output).unwrap();
        assert_eq!(summary.converted, 0);
        assert_eq!(summary.failed, 0);
    }
}
