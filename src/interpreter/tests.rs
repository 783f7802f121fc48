use super::*;

const TWO_RECIPES: &str = "## Tomato Pasta\nA quick classic.\nIngredients: tomato, pasta, garlic\n## Veggie Stir Fry\nFast and healthy.\nIngredients: broccoli, soy sauce";

fn suggestion(name: &str, description: &str, ingredients: &str) -> RecipeSuggestion {
    RecipeSuggestion {
        name: name.to_string(),
        description: description.to_string(),
        ingredients: ingredients.to_string(),
    }
}

#[test]
fn parses_two_recipes() {
    assert_eq!(
        parse_suggestions(TWO_RECIPES),
        vec![
            suggestion("Tomato Pasta", "A quick classic.", "tomato, pasta, garlic"),
            suggestion("Veggie Stir Fry", "Fast and healthy.", "broccoli, soy sauce"),
        ]
    );
}

#[test]
fn emits_one_suggestion_per_heading() {
    let text = "Here you go!\n## One\n\n## Two\nsome text\n## Three\n### not a heading\n## Four";
    let parsed = parse_suggestions(text);
    let headings = text.lines().filter(|line| line.starts_with("## ")).count();
    assert_eq!(parsed.len(), headings);
    assert_eq!(
        parsed.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        vec!["One", "Two", "Three", "Four"]
    );
}

#[test]
fn discards_text_before_first_heading() {
    let parsed = parse_suggestions("Sure! Ingredients: ignored\nIntro line\n## Soup\nWarm.");
    assert_eq!(parsed, vec![suggestion("Soup", "Warm.", "")]);
}

#[test]
fn heading_without_body_has_empty_fields() {
    assert_eq!(
        parse_suggestions("##   Plain Rice  "),
        vec![suggestion("Plain Rice", "", "")]
    );
}

#[test]
fn description_is_first_non_blank_line() {
    let parsed = parse_suggestions("## Salad\n   \n  Crisp and fresh.  \nSecond line is ignored.");
    assert_eq!(parsed[0].description, "Crisp and fresh.");
}

#[test]
fn inline_ingredients_do_not_become_description() {
    let parsed = parse_suggestions("## Toast\nCrunchy bread. Ingredients: bread, butter");
    assert_eq!(parsed, vec![suggestion("Toast", "", "bread, butter")]);
}

#[test]
fn last_ingredients_line_wins() {
    let parsed = parse_suggestions(
        "## Curry\nSpicy.\nIngredients: rice\n- Main Ingredients: chickpeas, spinach",
    );
    assert_eq!(parsed[0].ingredients, "chickpeas, spinach");
}

#[test]
fn heading_prefix_requires_trailing_space() {
    assert!(parse_suggestions("##Tight\n###  Deeper\n #  Indented").is_empty());
}

#[test]
fn initial_mode_returns_suggestions() {
    let reply = AIReply::new(TWO_RECIPES);
    match interpret(&reply, ConversationMode::Initial) {
        InterpretedResult::Suggestions(list) => assert_eq!(list.len(), 2),
        other => panic!("expected suggestions, got {other:?}"),
    }
}

#[test]
fn initial_mode_falls_back_to_raw_text() {
    let text = "I couldn't think of anything, sorry.\n**Try adding more ingredients.**";
    let reply = AIReply::new(text);
    assert_eq!(
        interpret(&reply, ConversationMode::Initial),
        InterpretedResult::RawText(text.to_string())
    );
}

#[test]
fn detail_mode_formats_markdown() {
    let reply = AIReply::new("### Ingredients\n**2 cups** flour\n*optional* sugar");
    assert_eq!(
        interpret(&reply, ConversationMode::Detail),
        InterpretedResult::FormattedText(
            "<h3>Ingredients</h3><br><strong>2 cups</strong> flour<br><em>optional</em> sugar"
                .to_string()
        )
    );
}

#[test]
fn detail_mode_never_parses_suggestions() {
    let reply = AIReply::new("## Tomato Pasta\nA quick classic.");
    assert_eq!(
        interpret(&reply, ConversationMode::Detail),
        InterpretedResult::FormattedText("<h2>Tomato Pasta</h2><br>A quick classic.".to_string())
    );
}

#[test]
fn formats_headings_only_at_line_start() {
    let html = format_markdown("Intro ### not a heading\n## Steps\n### Prep").unwrap();
    assert_eq!(
        html,
        "Intro ### not a heading<br><h2>Steps</h2><br><h3>Prep</h3>"
    );
}

#[test]
fn emphasis_is_non_greedy() {
    let html = format_markdown("*a* and *b*, **c** and **d**").unwrap();
    assert_eq!(
        html,
        "<em>a</em> and <em>b</em>, <strong>c</strong> and <strong>d</strong>"
    );
}

#[test]
fn emphasis_does_not_span_lines() {
    let html = format_markdown("*open\nclose*").unwrap();
    assert_eq!(html, "*open<br>close*");
}

#[test]
fn crlf_lines_keep_carriage_return_outside_tags() {
    let html = format_markdown("### Prep\r\nChop").unwrap();
    assert_eq!(html, "<h3>Prep</h3>\r<br>Chop");
}

#[test]
fn formatting_is_deterministic() {
    let text = "### Steps\n1. **Boil** water\n2. Add *salt*";
    assert_eq!(format_markdown(text).unwrap(), format_markdown(text).unwrap());
}
