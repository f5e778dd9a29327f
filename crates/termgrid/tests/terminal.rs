//! Golden output for the ASCII and Unicode styles.

use termgrid::{row, Align, Cell, CellStyle, Style, Table};

fn trim(s: &str) -> &str {
    s.strip_prefix('\n').unwrap_or(s)
}

fn assert_renders_to(table: &Table, expected: &str) {
    let output = table.render();
    assert_eq!(
        output,
        trim(expected),
        "\nActual:\n{}\nExpected:\n{}",
        output,
        trim(expected)
    );
}

fn sample_rows(table: &mut Table) {
    table.add_row(row!["hey", "you"]);
    table.add_row(row!["ken", 1234]);
    table.add_row(row!["derek", 3.14]);
    table.add_row(row!["derek too", 3.1456788]);
}

#[test]
fn create_table() {
    let mut table = Table::new();
    table.add_header_row(["Name", "Value"]);
    sample_rows(&mut table);
    table.add_row(row!["escaping", "rox%%"]);

    assert_renders_to(
        &table,
        r#"
+-----------+-------+
| Name      | Value |
+-----------+-------+
| hey       | you   |
| ken       | 1234  |
| derek     | 3.14  |
| derek too | 3.15  |
| escaping  | rox%% |
+-----------+-------+
"#,
    );
}

#[test]
fn two_column_end_to_end() {
    let mut table = Table::new();
    table.add_header_row(["Name", "Value"]);
    table.add_row(row!["hey", "you"]);
    table.add_row(row!["ken", 1234]);

    assert_renders_to(
        &table,
        r#"
+------+-------+
| Name | Value |
+------+-------+
| hey  | you   |
| ken  | 1234  |
+------+-------+
"#,
    );
}

#[test]
fn switching_style_back_resets_glyphs() {
    let mut table = Table::new();
    table.set_style(Style::Unicode);
    table.set_style(Style::Ascii);
    table.add_header_row(["Name", "Value"]);
    sample_rows(&mut table);

    assert_renders_to(
        &table,
        r#"
+-----------+-------+
| Name      | Value |
+-----------+-------+
| hey       | you   |
| ken       | 1234  |
| derek     | 3.14  |
| derek too | 3.15  |
+-----------+-------+
"#,
    );
}

#[test]
fn table_with_title() {
    let mut table = Table::new();
    table.add_title("Example");
    table.add_header_row(["Name", "Value"]);
    sample_rows(&mut table);

    let expected = r#"
+-------------------+
|      Example      |
+-----------+-------+
| Name      | Value |
+-----------+-------+
| hey       | you   |
| ken       | 1234  |
| derek     | 3.14  |
| derek too | 3.15  |
+-----------+-------+
"#;
    assert_renders_to(&table, expected);
    assert_renders_to(&table, expected);
}

#[test]
fn title_widens_last_column() {
    let mut table = Table::new();
    table.add_title("Example My Foo Bar'd Test");
    table.add_header_row(["Name", "Value"]);
    sample_rows(&mut table);

    assert_renders_to(
        &table,
        r#"
+---------------------------+
| Example My Foo Bar'd Test |
+-----------+---------------+
| Name      | Value         |
+-----------+---------------+
| hey       | you           |
| ken       | 1234          |
| derek     | 3.14          |
| derek too | 3.15          |
+-----------+---------------+
"#,
    );
}

#[test]
fn header_drives_width() {
    let mut table = Table::new();
    table.add_header_row(["Slightly Long", "More than 2 columns"]);
    table.add_row(row!["a", "b"]);

    assert_renders_to(
        &table,
        r#"
+---------------+---------------------+
| Slightly Long | More than 2 columns |
+---------------+---------------------+
| a             | b                   |
+---------------+---------------------+
"#,
    );
}

#[test]
fn table_without_headers() {
    let mut table = Table::new();
    sample_rows(&mut table);

    assert_renders_to(
        &table,
        r#"
+-----------+------+
| hey       | you  |
| ken       | 1234 |
| derek     | 3.14 |
| derek too | 3.15 |
+-----------+------+
"#,
    );
}

#[test]
fn unicode_widths() {
    let mut table = Table::new();
    table.add_header_row(["Name", "Cost"]);
    table.add_row(row!["Currency", "¤10"]);
    table.add_row(row!["US Dollar", "$30"]);
    table.add_row(row!["Euro", "€27"]);
    table.add_row(row!["Thai", "฿70"]);

    assert_renders_to(
        &table,
        r#"
+-----------+------+
| Name      | Cost |
+-----------+------+
| Currency  | ¤10  |
| US Dollar | $30  |
| Euro      | €27  |
| Thai      | ฿70  |
+-----------+------+
"#,
    );
}

#[test]
fn unicode_box_style() {
    let mut table = Table::with_style(Style::Unicode);
    table.add_title("Example");
    table.add_header_row(["Name", "Value"]);
    sample_rows(&mut table);
    table.add_row(row!["escaping", "rox%%"]);

    assert_renders_to(
        &table,
        r#"
╭───────────────────╮
│      Example      │
├───────────┬───────┤
│ Name      │ Value │
├───────────┼───────┤
│ hey       │ you   │
│ ken       │ 1234  │
│ derek     │ 3.14  │
│ derek too │ 3.15  │
│ escaping  │ rox%% │
╰───────────┴───────╯
"#,
    );
}

#[test]
fn unicode_box_with_stacked_headers() {
    let mut table = Table::with_style(Style::Unicode);
    table.add_title("Example");
    table.add_header_row(["Name", "Value"]);
    table.add_header_row(["Sub", "Sub"]);
    sample_rows(&mut table);
    table.add_row(row!["escaping", "rox%%"]);

    assert_renders_to(
        &table,
        r#"
╭───────────────────╮
│      Example      │
├───────────┬───────┤
│ Name      │ Value │
│ Sub       │ Sub   │
├───────────┼───────┤
│ hey       │ you   │
│ ken       │ 1234  │
│ derek     │ 3.14  │
│ derek too │ 3.15  │
│ escaping  │ rox%% │
╰───────────┴───────╯
"#,
    );
}

#[test]
fn unicode_box_with_colspan() {
    let mut table = Table::with_style(Style::Unicode);
    table.add_title("Example");
    table.add_header_row(["Name", "Value"]);
    table.add_header_row([Cell::with_style(
        "Sub",
        CellStyle {
            alignment: None,
            col_span: 2,
        },
    )]);
    table.add_row(row!["hey", "you"]);

    assert_renders_to(
        &table,
        r#"
╭──────────────╮
│   Example    │
├──────┬───────┤
│ Name │ Value │
│ Sub          │
├──────┼───────┤
│ hey  │ you   │
╰──────┴───────╯
"#,
    );
}

#[test]
fn escape_sequences_and_greek() {
    let sgr = |text: &str, code: &str| format!("\x1b[{}m{}\x1b[0m", code, text);
    let bold = |text: &str| sgr(text, "1");

    let mut table = Table::with_style(Style::Unicode);
    table.add_title(bold("Fanciness"));
    table.add_header_row([sgr("red", "31"), sgr("green", "32")]);
    table.add_row(row!["plain", "text"]);
    table.add_row(row!["Καλημέρα", "κόσμε"]);
    table.add_row([bold("very"), sgr("underlined", "4")]);
    table.add_row([format!("a{}c", bold("b")), sgr("magenta", "45")]);
    table.add_row([sgr("→", "31"), sgr("←", "32")]);

    let expected = "\
╭───────────────────────╮
│       \x1b[1mFanciness\x1b[0m       │
├──────────┬────────────┤
│ \x1b[31mred\x1b[0m      │ \x1b[32mgreen\x1b[0m      │
├──────────┼────────────┤
│ plain    │ text       │
│ Καλημέρα │ κόσμε      │
│ \x1b[1mvery\x1b[0m     │ \x1b[4munderlined\x1b[0m │
│ a\x1b[1mb\x1b[0mc      │ \x1b[45mmagenta\x1b[0m    │
│ \x1b[31m→\x1b[0m        │ \x1b[32m←\x1b[0m          │
╰──────────┴────────────╯
";
    assert_renders_to(&table, expected);
}

#[test]
fn title_measured_by_display_width() {
    let mut table = Table::new();
    table.add_title("← 5 →");
    table.add_row(row!["a", "b"]);
    table.add_row(row!["c", "d"]);
    table.add_row(row!["e", 3]);

    assert_renders_to(
        &table,
        r#"
+-------+
| ← 5 → |
+---+---+
| a | b |
| c | d |
| e | 3 |
+---+---+
"#,
    );
}

#[test]
fn widest_cell_per_column() {
    let mut table = Table::new();
    table.add_title("Example... to Fix My Test");
    table.add_row(row!["hey foo bar baz", "you"]);
    table.add_row(row!["ken", "you should write code"]);
    table.add_row(row!["derek", 3.14]);
    table.add_row(row!["derek too", 3.1456788]);

    assert_renders_to(
        &table,
        r#"
+-----------------------------------------+
|        Example... to Fix My Test        |
+-----------------+-----------------------+
| hey foo bar baz | you                   |
| ken             | you should write code |
| derek           | 3.14                  |
| derek too       | 3.15                  |
+-----------------+-----------------------+
"#,
    );
}

#[test]
fn odd_title_padding_goes_right() {
    let mut table = Table::new();
    table.add_title("Example... to Fix My Test");
    table.add_row(row!["hey foo bar baz", "you"]);
    table.add_row(row!["ken", "you should sell cod!"]);
    table.add_row(row!["derek", 3.14]);
    table.add_row(row!["derek too", 3.1456788]);

    assert_renders_to(
        &table,
        r#"
+----------------------------------------+
|       Example... to Fix My Test        |
+-----------------+----------------------+
| hey foo bar baz | you                  |
| ken             | you should sell cod! |
| derek           | 3.14                 |
| derek too       | 3.15                 |
+-----------------+----------------------+
"#,
    );
}

#[test]
fn column_alignment_set_after_rows() {
    let mut table = Table::new();
    table.add_header_row(["Name", "Value"]);
    sample_rows(&mut table);
    table.add_row(row!["escaping", "rox%%"]);
    table.set_align(Align::Right, 0);

    assert_renders_to(
        &table,
        r#"
+-----------+-------+
| Name      | Value |
+-----------+-------+
|       hey | you   |
|       ken | 1234  |
|     derek | 3.14  |
| derek too | 3.15  |
|  escaping | rox%% |
+-----------+-------+
"#,
    );
}

#[test]
fn cell_alignment_beats_column_alignment() {
    let mut table = Table::new();
    table.add_row(row!["a", "right"]);
    table.add_row([Cell::from("b"), Cell::new("x").align(Align::Left)]);
    table.add_row(row!["c", "y"]);
    table.set_align(Align::Right, 1);

    assert_renders_to(
        &table,
        r#"
+---+-------+
| a | right |
| b | x     |
| c |     y |
+---+-------+
"#,
    );
}

#[test]
fn missing_cells_render_empty() {
    let mut table = Table::new();
    table.add_header_row(["Name", "Value 1", "Value 2"]);
    table.add_row(row!["hey", "you", "person"]);
    table.add_row(row!["ken", 1234]);
    table.add_row(row!["escaping", "rox%s%%"]);

    assert_renders_to(
        &table,
        r#"
+----------+---------+---------+
| Name     | Value 1 | Value 2 |
+----------+---------+---------+
| hey      | you     | person  |
| ken      | 1234    |         |
| escaping | rox%s%% |         |
+----------+---------+---------+
"#,
    );
}

#[test]
fn combining_marks_measured_per_character() {
    let mut table = Table::new();
    table.add_row(row!["noel", "1"]);
    table.add_row(row!["noe\u{0308}l", "2"]);
    table.add_row(row!["noël", "3"]);

    assert_renders_to(
        &table,
        "
+------+---+
| noel | 1 |
| noe\u{0308}l | 2 |
| noël | 3 |
+------+---+
",
    );
}

#[test]
fn control_characters_measure_the_same_in_any_row() {
    let mut table = Table::new();
    table.add_row(row!["a\tb", "x"]);
    table.add_row(row!["é\tb", "y"]);

    assert_renders_to(
        &table,
        "
+----+---+
| a\tb | x |
| é\tb | y |
+----+---+
",
    );
}

#[test]
fn fullwidth_latin() {
    let mut table = Table::new();
    table.add_row(row!["wide", "not really"]);
    table.add_row(row!["ｗｉｄｅ", "fullwidth"]);

    assert_renders_to(
        &table,
        r#"
+----------+------------+
| wide     | not really |
| ｗｉｄｅ | fullwidth  |
+----------+------------+
"#,
    );
}

#[test]
fn cjk_characters() {
    let mut table = Table::new();
    table.add_header_row(["KeyID", "ValueID", "ValueCN"]);
    table.add_row(row!["8", 51, "精钢"]);
    table.add_row(row!["8", 52, "鳄鱼皮"]);
    table.add_row(row!["8", 53, "镀金皮带"]);
    table.add_row(row!["8", 54, "精钢"]);

    assert_renders_to(
        &table,
        r#"
+-------+---------+----------+
| KeyID | ValueID | ValueCN  |
+-------+---------+----------+
| 8     | 51      | 精钢     |
| 8     | 52      | 鳄鱼皮   |
| 8     | 53      | 镀金皮带 |
| 8     | 54      | 精钢     |
+-------+---------+----------+
"#,
    );

    let mut table = Table::new();
    table.add_header_row(["field", "value"]);
    table.add_row(row!["GoodsPropertyKeyID", 9]);
    table.add_row(row!["MerchantAccountID", 0]);
    table.add_row(row!["GoodsCategoryCode", 100001]);
    table.add_row(row!["NameCN", "机芯类型"]);
    table.add_row(row!["NameJP", "ムーブメントのタイプ"]);

    assert_renders_to(
        &table,
        r#"
+--------------------+----------------------+
| field              | value                |
+--------------------+----------------------+
| GoodsPropertyKeyID | 9                    |
| MerchantAccountID  | 0                    |
| GoodsCategoryCode  | 100001               |
| NameCN             | 机芯类型             |
| NameJP             | ムーブメントのタイプ |
+--------------------+----------------------+
"#,
    );
}

#[test]
fn stacked_header_rows() {
    let mut table = Table::new();
    table.add_header_row(["First column", "Second"]);
    table.add_header_row(["Sub", "Sub"]);
    table.add_row(row![2, 3]);

    assert_renders_to(
        &table,
        r#"
+--------------+--------+
| First column | Second |
| Sub          | Sub    |
+--------------+--------+
| 2            | 3      |
+--------------+--------+
"#,
    );
}

#[test]
fn body_separator() {
    let mut table = Table::new();
    table.add_header_row(["Name", "Value"]);
    table.add_row(row!["hey", "you"]);
    table.add_separator();
    table.add_row(row!["ken", 1234]);

    assert_renders_to(
        &table,
        r#"
+------+-------+
| Name | Value |
+------+-------+
| hey  | you   |
+------+-------+
| ken  | 1234  |
+------+-------+
"#,
    );
}

#[test]
fn spanning_body_cell_keeps_other_boundaries() {
    let mut table = Table::new();
    table.add_row(row!["abcd", "abcde"]);
    table.add_row([Cell::new("0123456789").span(2)]);
    table.add_row(row!["x", "y"]);

    assert_renders_to(
        &table,
        r#"
+------+-------+
| abcd | abcde |
| 0123456789   |
| x    | y     |
+------+-------+
"#,
    );
}

#[test]
fn wide_span_distributes_shortfall() {
    let mut table = Table::with_style(Style::Unicode);
    table.add_header_row([Cell::new("A much longer heading").span(2)]);
    table.add_row(row!["a", "b"]);

    assert_renders_to(
        &table,
        r#"
╭───────────┬───────────╮
│ A much longer heading │
├───────────┼───────────┤
│ a         │ b         │
╰───────────┴───────────╯
"#,
    );
}

#[test]
fn title_only_table() {
    let mut table = Table::new();
    table.add_title("Lonely");

    assert_renders_to(
        &table,
        r#"
+--------+
| Lonely |
+--------+
"#,
    );

    table.set_style(Style::Unicode);
    assert_renders_to(
        &table,
        r#"
╭────────╮
│ Lonely │
╰────────╯
"#,
    );
}

#[test]
fn empty_table_renders_nothing() {
    assert_eq!(Table::new().render(), "");
    assert_eq!(Table::with_style(Style::Unicode).render(), "");
}

#[test]
fn display_matches_render() {
    let mut table = Table::new();
    table.add_row(row!["ken", 1234]);
    assert_eq!(table.to_string(), table.render());
}
