use garnish_markup::{escape, Color, MarkupFormatter, MarkupError, Style, StyleRegistry, TextOption};

fn formatter(decorated: bool) -> MarkupFormatter {
    MarkupFormatter::new(decorated, StyleRegistry::new())
}

#[test]
fn decoration_modes_share_parsing() {
    let input = "<info>hello</info> <comment>world</comment>";

    let plain = formatter(false).format(input).unwrap();
    assert_eq!(plain, "hello world");

    let styled = formatter(true).format(input).unwrap();
    assert!(styled.contains("\x1b[32m"));
    assert!(styled.contains("\x1b[33m"));
    assert!(styled.contains("hello"));
    assert!(styled.contains("world"));
}

#[test]
fn deeply_nested_markup_restores_scopes_in_order() {
    let out = formatter(true)
        .format("<fg=red>r<fg=green>g<fg=blue>b</>g</>r</>")
        .unwrap();
    assert_eq!(
        out,
        "\x1b[31mr\x1b[39m\x1b[32mg\x1b[39m\x1b[34mb\x1b[39m\x1b[32mg\x1b[39m\x1b[31mr\x1b[39m"
    );
}

#[test]
fn mixed_known_and_unknown_tags() {
    let out = formatter(false)
        .format("before <info>known</info> <mystery>literal</mystery> after")
        .unwrap();
    assert_eq!(out, "before known <mystery>literal</mystery> after");
}

#[test]
fn registry_is_per_formatter() {
    let mut custom = StyleRegistry::new();
    custom.register("hot", Style::new().fg(Color::Red).option(TextOption::Bold));

    let mut with_custom = MarkupFormatter::new(false, custom);
    let mut stock = formatter(false);

    assert_eq!(with_custom.format("<hot>x</hot>").unwrap(), "x");
    assert_eq!(stock.format("<hot>x</hot>").unwrap(), "<hot>x</hot>");
}

#[test]
fn out_of_order_close_fails_without_corrupting_prior_output() {
    let mut f = formatter(false);
    // A good call first.
    assert_eq!(f.format("<info>ok</info>").unwrap(), "ok");
    // Then a bad one: the error surfaces, the formatter stays usable.
    assert!(matches!(
        f.format("<comment>x</error>"),
        Err(MarkupError::UnbalancedTag(_))
    ));
    f.reset();
    assert_eq!(f.format("fine").unwrap(), "fine");
}

#[test]
fn escaped_markup_in_user_data() {
    let user_data = "tags like <b> and <i> are data";
    let mut f = formatter(true);
    assert_eq!(f.format(&escape(user_data)).unwrap(), user_data);
}

#[test]
fn visible_length_drives_layout_decisions() {
    let mut f = formatter(true);
    let decorated_cell = "<error>ERR</error>";
    let plain_cell = "ERR";
    assert_eq!(
        f.length_without_decoration(decorated_cell).unwrap(),
        f.length_without_decoration(plain_cell).unwrap()
    );
}
