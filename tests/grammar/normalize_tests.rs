//! Speech normalization tests.

use chesstalk_grammar::normalize;

#[test]
fn whole_phrases() {
    assert_eq!(normalize("Night takes E for"), "knight takes e 4");
    assert_eq!(normalize("pawn to d four"), "d 4");
    assert_eq!(normalize("bishop to be five"), "bishop b 5");
    assert_eq!(normalize("rook from age one to be one"), "rook h 1 b 1");
}

#[test]
fn rewrites_only_match_whole_words() {
    // "knight" contains "night"; "castles" contains "castle".
    assert_eq!(normalize("knight f three"), "knight f 3");
    assert_eq!(normalize("bishop takes queen"), "bishop takes queen");
    assert_eq!(normalize("castles kingside"), "castles kingside");
}

#[test]
fn to_before_a_file_is_filler() {
    assert_eq!(normalize("queen to d eight"), "queen d 8");
    assert_eq!(normalize("e to"), "e 2");
}

#[test]
fn do_you_want_and_before() {
    assert_eq!(normalize("queen do you want"), "queen d 1");
    assert_eq!(normalize("bishop before"), "bishop b 4");
}

#[test]
fn captures_is_takes() {
    assert_eq!(normalize("e captures d five"), "e takes d 5");
}

#[test]
fn normalizing_is_idempotent_on_clean_phrases() {
    for phrase in [
        "knight takes e 4 check",
        "castles queenside",
        "e 8 equals queen",
        "rook a d 1",
    ] {
        assert_eq!(normalize(phrase), phrase);
        assert_eq!(normalize(&normalize(phrase)), phrase);
    }
}
