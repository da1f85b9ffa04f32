use crate::engine::{EngineOptions, simulate, simulate_with};

fn without_revert() -> EngineOptions {
    EngineOptions {
        double_key_revert: false,
        ..EngineOptions::default()
    }
}

#[test]
fn behavioral_contract() {
    let cases = [
        ("as", "á"),
        ("af", "à"),
        ("aj", "ạ"),
        ("azs", "ấ"),
        ("tuongw", "tương"),
        ("tien", "tiên"),
        ("yen", "yên"),
        ("hocs", "hóc"),
        ("hocf", "hocf"),
        ("asc", "asc"),
        ("aww", "aww"),
        ("azz", "azz"),
        ("dangd", "đang"),
        ("dang", "dang"),
    ];

    for (input, expected) in cases {
        assert_eq!(simulate(input), expected, "input: {input}");
    }
}

#[test]
fn everyday_words() {
    let cases = [
        ("Vietj", "Việt"),
        ("VIETJ", "VIỆT"),
        ("Tiengs", "Tiếng"),
        ("nguoiwf", "người"),
        ("duongwfd", "đường"),
        ("muongzs", "muống"),
        ("quas", "quá"),
        ("gias", "giá"),
        ("tias", "tía"),
        ("hoaf", "hoà"),
        ("quangw", "quăng"),
        ("cuaw", "cưa"),
        ("uwj", "ự"),
        ("sachs", "sách"),
        ("deps", "dép"),
        ("tiens", "tiến"),
    ];

    for (input, expected) in cases {
        assert_eq!(simulate(input), expected, "input: {input}");
    }
}

#[test]
fn telex_reference_table() {
    let cases = [
        ("as", "á"),
        ("af", "à"),
        ("ar", "ả"),
        ("ax", "ã"),
        ("aj", "ạ"),
        ("az", "â"),
        ("ez", "ê"),
        ("oz", "ô"),
        ("aw", "ă"),
        ("ow", "ơ"),
        ("uw", "ư"),
        ("azs", "ấ"),
        ("uwj", "ự"),
        ("tuongw", "tương"),
        ("muonws", "mướn"),
        ("luonw", "lươn"),
        ("quas", "quá"),
        ("gias", "giá"),
        ("muons", "muón"),
        ("tien", "tiên"),
        ("yen", "yên"),
        ("tiens", "tiến"),
        ("rerun", "rerun"),
        ("xyz", "xyz"),
        ("zzs", "zzs"),
        ("aks", "aks"),
        ("tuons", "tuón"),
        ("tias", "tía"),
        ("ties", "ties"),
        ("hocs", "hóc"),
        ("hocj", "học"),
        ("hocf", "hocf"),
        ("hocr", "hocr"),
        ("hocx", "hocx"),
        ("sachs", "sách"),
        ("sachf", "sachf"),
        ("mats", "mát"),
        ("matf", "matf"),
        ("deps", "dép"),
        ("depf", "depf"),
    ];

    for (input, expected) in cases {
        assert_eq!(simulate(input), expected, "input: {input}");
    }
}

#[test]
fn closed_uo_and_qu_y_rimes() {
    let cases = [
        ("cuopws", "cướp"),
        ("muopwj", "mượp"),
        ("quyts", "quýt"),
        ("quynhf", "quỳnh"),
        ("Quynhf", "Quỳnh"),
        ("quychs", "quých"),
    ];

    for (input, expected) in cases {
        assert_eq!(simulate(input), expected, "input: {input}");
    }
}

#[test]
fn stop_endings_reject_other_tones() {
    assert_eq!(simulate("sachf"), "sachf");
    assert_eq!(simulate("mats"), "mát");
    assert_eq!(simulate("matf"), "matf");
    assert_eq!(simulate("depr"), "depr");
}

#[test]
fn modifiers_only_act_at_the_end() {
    assert_eq!(simulate("ties"), "ties");
    assert_eq!(simulate("aks"), "aks");
    assert_eq!(simulate("rerun"), "rerun");
}

#[test]
fn invalid_syllables_keep_every_keystroke() {
    assert_eq!(simulate("xyz"), "xyz");
    assert_eq!(simulate("xyzb"), "xyzb");
    assert_eq!(simulate("asck"), "asck");
}

#[test]
fn repeated_tone_key_depends_on_revert_option() {
    assert_eq!(simulate("ass"), "ass");
    assert_eq!(simulate_with(without_revert(), "ass"), "á");
}

#[test]
fn stroke_d_toggles() {
    assert_eq!(simulate("dadd"), "dadd");
    assert_eq!(simulate_with(without_revert(), "dadd"), "da");
    assert_eq!(simulate_with(without_revert(), "dad"), "đa");
}

#[test]
fn ie_conversion_can_be_disabled() {
    let options = EngineOptions {
        auto_ie_ye: false,
        ..EngineOptions::default()
    };
    assert_eq!(simulate_with(options, "tien"), "tien");
    assert_eq!(simulate_with(options, "yen"), "yen");
}

#[test]
fn sentences_commit_on_space() {
    assert_eq!(simulate("Vietj Nam"), "Việt Nam");
    assert_eq!(simulate("tieengs"), "tieengs");
    assert_eq!(simulate("xin chaof"), "xin chào");
}

#[test]
fn simulate_is_deterministic() {
    for input in ["tuongw", "ass", "Vietj", "xyz"] {
        assert_eq!(simulate(input), simulate(input));
    }
}
