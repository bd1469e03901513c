//! Helpers shared by the unit tests: temp file lifecycle and XML assertions

use std::path::PathBuf;

use quick_xml::events::Event;
use quick_xml::Reader;
use tempfile::TempDir;

/// A set of named files inside a private temp directory. Nothing is created
/// until written; the directory and everything in it is removed on drop.
pub(crate) struct TempFiles {
    dir: TempDir,
    names: Vec<String>,
}

impl TempFiles {
    pub(crate) fn new(names: &[&str]) -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub(crate) fn path(&self, index: usize) -> PathBuf {
        self.dir.path().join(&self.names[index])
    }

    pub(crate) fn write(&self, index: usize, content: &str) {
        std::fs::write(self.path(index), content).expect("write temp file");
    }

    pub(crate) fn write_lines(&self, index: usize, lines: &[&str]) {
        self.write(index, &crate::fs::join_lines(lines));
    }

    pub(crate) fn read(&self, index: usize) -> String {
        std::fs::read_to_string(self.path(index)).expect("read temp file")
    }

    pub(crate) fn read_lines(&self, index: usize) -> Vec<String> {
        self.read(index).lines().map(str::to_string).collect()
    }
}

/// A markup node reduced to what matters for comparison
#[derive(Debug, PartialEq)]
enum Node {
    Open(String, Vec<(String, String)>),
    Close(String),
    Text(String),
}

fn normalize(xml: &str) -> Vec<Node> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    reader.config_mut().expand_empty_elements = true;

    let mut nodes = Vec::new();
    loop {
        match reader.read_event().expect("well-formed xml") {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let mut attrs: Vec<(String, String)> = e
                    .attributes()
                    .map(|a| {
                        let a = a.expect("valid attribute");
                        (
                            String::from_utf8_lossy(a.key.as_ref()).into_owned(),
                            String::from_utf8_lossy(&a.value).into_owned(),
                        )
                    })
                    .collect();
                attrs.sort();
                nodes.push(Node::Open(name, attrs));
            }
            Event::End(e) => {
                nodes.push(Node::Close(
                    String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                ));
            }
            Event::Text(t) => {
                let text = String::from_utf8_lossy(&t).into_owned();
                if !text.is_empty() {
                    nodes.push(Node::Text(text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    nodes
}

/// Assert two documents are equal ignoring whitespace between elements,
/// attribute order and `<a/>` versus `<a></a>`
pub(crate) fn assert_xml_eq(actual: &str, expected: &str) {
    assert_eq!(
        normalize(actual),
        normalize(expected),
        "\nactual:   {}\nexpected: {}",
        actual,
        expected
    );
}

/// Assert that exactly `count` elements named `tag` carry the class `class`
pub(crate) fn assert_element_count(xml: &str, tag: &str, class: &str, count: usize) {
    let found = normalize(xml)
        .iter()
        .filter(|node| match node {
            Node::Open(name, attrs) => {
                name == tag && attrs.iter().any(|(k, v)| k == "class" && v == class)
            }
            _ => false,
        })
        .count();
    assert_eq!(found, count, "expected {count} <{tag} class=\"{class}\"> in {xml}");
}

/// Assert that `xml` contains an element with the given class
pub(crate) fn assert_has_element_with_class(xml: &str, class: &str) {
    let found = normalize(xml).iter().any(|node| match node {
        Node::Open(_, attrs) => attrs.iter().any(|(k, v)| k == "class" && v == class),
        _ => false,
    });
    assert!(found, "no element with class \"{class}\" in {xml}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_xml_eq_ignores_layout() {
        assert_xml_eq(
            "<html>\n  <div b='2' a=\"1\"/>\n</html>",
            "<html><div a='1' b='2'></div></html>",
        );
    }

    #[test]
    #[should_panic]
    fn test_assert_xml_eq_detects_difference() {
        assert_xml_eq("<p>one</p>", "<p>two</p>");
    }

    #[test]
    fn test_temp_files_cleanup() {
        let path = {
            let files = TempFiles::new(&["a.txt"]);
            files.write_lines(0, &["x", "y"]);
            assert_eq!(files.read_lines(0), vec!["x", "y"]);
            files.path(0)
        };
        assert!(!path.exists());
    }
}
