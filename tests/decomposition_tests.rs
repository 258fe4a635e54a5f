use termcut::decompose::{
    decompose, CompoundOrder, DecomposeOptions, Decomposer, Lexicon,
};

#[test]
fn test_particle_dropped_compound_preserved() {
    let terms = decompose("국가정책의 이해");
    assert_eq!(terms.terms(), &["국가정책", "이해"]);
}

#[test]
fn test_latin_prefix_separated_from_compound() {
    // The compound boundary itself separates the Latin run; no space
    // exists in the input.
    let terms = decompose("KOHI북토크");
    println!("KOHI북토크 -> {:?}", terms.terms());
    assert!(terms.terms().contains(&"KOHI".to_string()));
    assert!(terms.terms().contains(&"북토크".to_string()));
}

#[test]
fn test_parenthesized_content_retained() {
    let terms = decompose("저작권(기초)교육");
    assert_eq!(terms.terms(), &["저작권", "기초", "교육"]);
}

#[test]
fn test_pure_noise_falls_back_to_original() {
    let terms = decompose("!!!---");
    assert_eq!(terms.terms(), &["!!!---"]);
}

#[test]
fn test_idempotent_on_lone_compound() {
    let first = decompose("사회복지");
    assert_eq!(first.terms(), &["사회복지"]);
    let second = decompose(&first.query());
    assert_eq!(second.terms(), first.terms());
}

#[test]
fn test_compound_preserved_inside_longer_title() {
    let terms = decompose("사회복지정책");
    assert_eq!(terms.terms(), &["사회복지", "정책"]);
}

#[test]
fn test_connector_fused_with_following_term() {
    let terms = decompose("소통을 위한 리더십");
    assert_eq!(terms.terms(), &["소통", "위한 리더십"]);
}

#[test]
fn test_trailing_connector_dropped() {
    let terms = decompose("소통을 위한");
    assert_eq!(terms.terms(), &["소통"]);
}

#[test]
fn test_duplicate_terms_collapse() {
    let terms = decompose("사회복지 사회복지");
    assert_eq!(terms.terms(), &["사회복지"]);
}

#[test]
fn test_empty_input_yields_empty_list() {
    let terms = decompose("");
    assert!(terms.is_empty());
}

#[test]
fn test_whitespace_only_input_returned_unchanged() {
    let terms = decompose("   ");
    assert_eq!(terms.terms(), &["   "]);
}

#[test]
fn test_query_joins_terms_with_spaces() {
    let terms = decompose("국가정책의 이해");
    assert_eq!(terms.query(), "국가정책 이해");
}

#[test]
fn test_term_list_serializes_as_plain_array() {
    let terms = decompose("국가정책의 이해");
    let json = serde_json::to_string(&terms).unwrap();
    assert_eq!(json, r#"["국가정책","이해"]"#);
}

#[test]
fn test_acronym_extraction_keeps_both_sides() {
    let options = DecomposeOptions {
        extract_acronyms: true,
        split_long_runs: false,
    };
    let decomposer = Decomposer::new().options(options);
    let terms = decomposer.decompose("MZ세대 소통");
    println!("MZ세대 소통 -> {:?}", terms.terms());
    assert!(terms.terms().contains(&"MZ".to_string()));
    assert!(terms.terms().contains(&"세대".to_string()));
    assert!(terms.terms().contains(&"소통".to_string()));
}

#[test]
fn test_acronyms_off_by_default() {
    let terms = decompose("MZ세대 소통");
    assert!(!terms.terms().contains(&"MZ".to_string()));
}

#[test]
fn test_long_run_split_under_aggressive() {
    let decomposer = Decomposer::new().options(DecomposeOptions::aggressive());
    let terms = decomposer.decompose("아동학대예방교육");
    assert_eq!(terms.terms(), &["아동학대", "예방교육"]);
}

#[test]
fn test_long_run_kept_whole_by_default() {
    let terms = decompose("아동학대예방교육");
    assert_eq!(terms.terms(), &["아동학대예방교육"]);
}

#[test]
fn test_custom_lexicon_changes_output() {
    let lexicon = Lexicon::builder()
        .compounds(["데이터분석"])
        .particles(["의"])
        .build()
        .unwrap();
    let decomposer = Decomposer::with_lexicon(lexicon);
    let terms = decomposer.decompose("데이터분석의 이해");
    assert_eq!(terms.terms(), &["데이터분석", "이해"]);
}

#[test]
fn test_declaration_order_lets_earlier_entry_win() {
    let lexicon = Lexicon::builder()
        .compounds(["복지", "사회복지"])
        .build()
        .unwrap();
    let terms = Decomposer::with_lexicon(lexicon).decompose("사회복지정책");
    assert_eq!(terms.terms(), &["사회", "복지", "정책"]);
}

#[test]
fn test_longest_first_order_prefers_longer_entry() {
    let lexicon = Lexicon::builder()
        .compounds(["복지", "사회복지"])
        .compound_order(CompoundOrder::LongestFirst)
        .build()
        .unwrap();
    let terms = Decomposer::with_lexicon(lexicon).decompose("사회복지정책");
    assert_eq!(terms.terms(), &["사회복지", "정책"]);
}

#[test]
fn test_noise_symbols_and_hanja_removed() {
    let terms = decompose("共사회복지***정책");
    assert_eq!(terms.terms(), &["사회복지", "정책"]);
}

#[test]
fn test_full_course_title() {
    // A realistic catalog entry touching most pipeline stages at once.
    let terms = decompose("2024년 사회복지사를 위한 사례관리 실무과정");
    println!("full title -> {:?}", terms.terms());
    assert_eq!(
        terms.terms(),
        &["2024년", "사회복지", "위한 사례관리", "실무"]
    );
}
