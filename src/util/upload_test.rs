use super::*;

#[test]
fn accept_attribute_lists_all_extensions() {
    assert_eq!(accept_attribute(), ".pdf,.doc,.docx,.txt");
}

#[test]
fn accepts_known_extensions_case_insensitively() {
    assert!(is_accepted_file_name("report.pdf"));
    assert!(is_accepted_file_name("Notes.TXT"));
    assert!(is_accepted_file_name("memo.doc"));
    assert!(is_accepted_file_name("memo.final.docx"));
}

#[test]
fn rejects_other_extensions() {
    assert!(!is_accepted_file_name("photo.png"));
    assert!(!is_accepted_file_name("archive.pdf.zip"));
    assert!(!is_accepted_file_name("README"));
}

#[test]
fn rejects_bare_extension() {
    assert!(!is_accepted_file_name(".pdf"));
}

#[test]
fn partition_keeps_order() {
    let (accepted, rejected) = partition_by_name(["a.pdf", "b.png", "c.txt", "d.exe"], |name| (*name).to_owned());
    assert_eq!(accepted, vec!["a.pdf", "c.txt"]);
    assert_eq!(rejected, vec!["b.png", "d.exe"]);
}
