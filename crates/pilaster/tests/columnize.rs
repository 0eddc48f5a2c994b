//! End-to-end tests for the high-level columnize API.

use std::fs::{self, File};
use std::path::PathBuf;

use pilaster::{
    columnize_dir, columnize_with, measure_width, write_columnized, Items, LayoutError, Options,
};

fn seq(items: &[&str]) -> Items {
    Items::sequence(items.iter().copied())
}

fn opts(line_width: usize) -> Options {
    Options::new().line_width(line_width)
}

#[test]
fn no_items_give_empty_output() {
    assert_eq!(columnize_with(seq(&[]), &opts(80)).unwrap(), "");
}

#[test]
fn everything_on_one_line_when_it_fits() {
    let output = columnize_with(seq(&["spam", "ham", "eggs"]), &opts(80)).unwrap();
    assert_eq!(output, "spam  ham  eggs");
}

#[test]
fn spacing_is_applied_exactly() {
    let items = ["foo", "bar", "baz"];
    for (spacing, expected) in [
        (0, "foobarbaz"),
        (1, "foo bar baz"),
        (2, "foo  bar  baz"),
    ] {
        let output = columnize_with(seq(&items), &opts(80).spacing(spacing)).unwrap();
        assert_eq!(output, expected, "spacing: {spacing}");
    }
}

#[test]
fn layout_follows_the_line_width() {
    let x = "x".repeat(30);
    let y = "y".repeat(10);
    let a = "ä".repeat(15);
    let items = seq(&[&x, &y, &a]);

    let wide = columnize_with(items.clone(), &opts(80)).unwrap();
    assert_eq!(wide, format!("{x}  {y}  {a}"));

    let medium = columnize_with(items.clone(), &opts(50)).unwrap();
    assert_eq!(medium, format!("{x}  {a}\n{y}"));

    let narrow = columnize_with(items, &opts(45)).unwrap();
    assert_eq!(narrow, format!("{x}\n{y}\n{a}"));
}

#[test]
fn items_fill_columns_top_to_bottom() {
    let items = seq(&["a", "bb", "ccc", "dddd", "eeeee", "ffffff"]);
    let output = columnize_with(items, &opts(20).num_columns(2)).unwrap();
    assert_eq!(output, "a    dddd\nbb   eeeee\nccc  ffffff");
}

#[test]
fn exactly_filled_lines_are_allowed() {
    let f = "f".repeat(50);
    let g = "g".repeat(40);
    let h = "h".repeat(28);
    let output = columnize_with(seq(&[&f, &g, &h]), &opts(80)).unwrap();
    assert_eq!(output, format!("{f}  {h}\n{g}"));
}

#[test]
fn overwide_items_are_rejected_by_default() {
    let wide = "w".repeat(81);
    let result = columnize_with(seq(&[&wide]), &opts(80));
    assert!(matches!(result, Err(LayoutError::InsufficientWidth)));
}

#[test]
fn exceeding_passes_overwide_items_through() {
    let wide = "w".repeat(81);
    let output = columnize_with(seq(&[&wide]), &opts(80).allow_exceeding(true)).unwrap();
    assert_eq!(output, wide);
}

#[test]
fn unique_keeps_first_occurrences() {
    let items = seq(&["spam", "ham", "spam", "eggs", "ham"]);
    let output = columnize_with(items, &opts(80).unique(true)).unwrap();
    assert_eq!(output, "spam  ham  eggs");
}

#[test]
fn sorting_happens_before_layout() {
    let items = seq(&["spam", "eggs", "ham"]);
    let output = columnize_with(items, &opts(80).sort_items(true)).unwrap();
    assert_eq!(output, "eggs  ham  spam");
}

#[test]
fn patterns_filter_by_whole_name() {
    let items = seq(&["xxx", "yyy", "xyz"]);
    let output = columnize_with(items, &opts(80).pattern("x*")).unwrap();
    assert_eq!(output, "xxx  xyz");
}

#[test]
fn rendering_is_idempotent() {
    let items = seq(&["one", "two", "three", "four", "five"]);
    let options = opts(18).sort_items(true);
    let first = columnize_with(items.clone(), &options).unwrap();
    let second = columnize_with(items, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn lines_never_exceed_the_width() {
    let items = seq(&[
        "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta",
    ]);
    let output = columnize_with(items, &opts(40)).unwrap();
    assert_eq!(
        output,
        "alpha  gamma  epsilon  eta\nbeta   delta  zeta     theta"
    );
    for line in output.split('\n') {
        assert!(measure_width(line) <= 40);
    }
}

#[test]
fn renders_a_three_column_grid() {
    let items = seq(&[
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf",
    ]);
    let output = columnize_with(items, &opts(26)).unwrap();
    insta::assert_snapshot!(output, @r"
    alpha    delta    golf
    bravo    echo
    charlie  foxtrot
    ");
}

#[test]
fn mappings_render_pairwise() {
    let pairs = Items::mapping([("key", "value"), ("other", "thing")]);
    let output = columnize_with(pairs, &opts(80)).unwrap();
    assert_eq!(output, "key    value\nother  thing");
}

#[test]
fn mappings_sort_by_key() {
    let pairs = Items::mapping([("other", "thing"), ("key", "value")]);
    let output = columnize_with(pairs, &opts(80).sort_items(true)).unwrap();
    assert_eq!(output, "key    value\nother  thing");
}

#[test]
fn overflowing_values_shrink_and_wrap() {
    let key = "k".repeat(48);
    let value = "v".repeat(35);
    let pairs = Items::mapping([(key.clone(), value)]);
    let output = columnize_with(pairs, &opts(80)).unwrap();
    let first = format!("{}  {}", key, "v".repeat(30));
    let second = format!("{}  {}", " ".repeat(48), "v".repeat(5));
    assert_eq!(output, format!("{first}\n{second}"));
    for line in output.split('\n') {
        assert!(measure_width(line) <= 80);
    }
}

#[test]
fn extra_separator_sits_between_columns() {
    let output = columnize_with(seq(&["foo", "bar"]), &opts(80).extra_sep('|')).unwrap();
    assert_eq!(output, "foo | bar");
}

#[test]
fn zero_columns_are_rejected() {
    let result = columnize_with(seq(&["spam"]), &opts(80).num_columns(0));
    assert!(matches!(result, Err(LayoutError::InvalidColumns)));
}

#[test]
fn zero_line_width_is_rejected() {
    let result = columnize_with(seq(&["spam"]), &opts(0));
    assert!(matches!(result, Err(LayoutError::InvalidLineWidth)));
}

#[test]
fn writing_appends_a_line_break() {
    let mut buffer = Vec::new();
    write_columnized(&mut buffer, seq(&["spam", "ham", "eggs"]), &opts(80)).unwrap();
    assert_eq!(buffer, b"spam  ham  eggs\n");
}

struct TempDir(PathBuf);

impl TempDir {
    fn create(label: &str, files: &[&str]) -> Self {
        let path =
            std::env::temp_dir().join(format!("pilaster-dir-{label}-{}", std::process::id()));
        fs::create_dir_all(&path).unwrap();
        for name in files {
            File::create(path.join(name)).unwrap();
        }
        TempDir(path)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn directories_render_sorted() {
    let dir = TempDir::create("sorted", &["b", "a", "c"]);
    let output = columnize_dir(&dir.0, false, &opts(80)).unwrap();
    assert_eq!(output, "a  b  c");
}

#[test]
fn directories_can_hide_dotfiles() {
    let dir = TempDir::create("dotted", &["b", ".hidden", "a"]);
    let output = columnize_dir(&dir.0, true, &opts(80)).unwrap();
    assert_eq!(output, "a  b");
}
