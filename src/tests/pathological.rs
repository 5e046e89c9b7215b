use super::*;
use ntest::timeout;

#[test]
#[timeout(4000)]
fn pathological_unclosed_lefts() {
    let n = 50_000;
    let input = format!("<p>{}</p>", "\\( \\[ ".repeat(n));

    html(&input, &input);
}

#[test]
#[timeout(4000)]
fn pathological_open_braces() {
    let n = 100_000;
    let input = format!("<p>\\({}\\)</p>", "{".repeat(n));

    html(&input, &input);
}

#[test]
#[timeout(4000)]
fn pathological_many_spans() {
    let n = 20_000;
    let input = format!("<p>{}</p>", "\\(x\\) ".repeat(n));
    let exp = format!("<p>{}</p>", format!("{} ", inline("x")).repeat(n));

    html(&input, &exp);
}

#[test]
#[timeout(4000)]
fn pathological_nesting() {
    let n = 50_000;
    let input = format!("{}\\(x\\){}", "<div>".repeat(n), "</div>".repeat(n));
    let exp = format!("{}{}{}", "<div>".repeat(n), inline("x"), "</div>".repeat(n));

    html(&input, &exp);
}

#[test]
#[timeout(4000)]
fn pathological_backslashes() {
    let n = 100_000;
    let input = format!("<p>$${}$$</p>", "\\".repeat(2 * n));
    let exp = format!("<p>{}</p>", display(&"\\".repeat(2 * n)));

    html(&input, &exp);
}
