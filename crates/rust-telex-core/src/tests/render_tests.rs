use crate::render::{Edit, OutputSink, RecordingSink, Renderer};

fn edit(backspaces: usize, insert: &str) -> Edit {
    Edit {
        backspaces,
        insert: insert.to_string(),
    }
}

#[test]
fn diff_keeps_common_prefix() {
    assert_eq!(Edit::between("tuong", "tương"), Some(edit(4, "ương")));
    assert_eq!(Edit::between("á", "ấ"), Some(edit(1, "ấ")));
    assert_eq!(Edit::between("", "a"), Some(edit(0, "a")));
    assert_eq!(Edit::between("tiê", ""), Some(edit(3, "")));
}

#[test]
fn diff_counts_scalar_values_not_bytes() {
    assert_eq!(Edit::between("người", "ngườ"), Some(edit(1, "")));
}

#[test]
fn identical_text_needs_no_edit() {
    assert_eq!(Edit::between("tương", "tương"), None);
}

#[test]
fn renderer_tracks_what_is_shown() {
    let mut r = Renderer::default();
    assert_eq!(r.render("a"), Some(edit(0, "a")));
    assert_eq!(r.render("á"), Some(edit(1, "á")));
    assert_eq!(r.render("á"), None);
    assert_eq!(r.shown(), "á");

    r.clear();
    assert_eq!(r.shown(), "");
    assert_eq!(r.render("b"), Some(edit(0, "b")));
}

#[test]
fn apply_skips_empty_operations() {
    let mut sink = RecordingSink::default();
    edit(0, "ab").apply(&mut sink);
    edit(1, "").apply(&mut sink);
    assert_eq!(sink.text, "a");
    assert_eq!(sink.backspaces_sent, 1);
    assert_eq!(sink.inserts_sent, 1);
}

#[test]
fn recording_sink_replays_in_order() {
    let mut sink = RecordingSink::default();
    sink.send_text("tuong");
    sink.send_backspaces(4);
    sink.send_text("ương");
    assert_eq!(sink.text, "tương");
}
