use std::{collections::HashMap, fs, path::PathBuf};

use serde_json::json;
use sharps::{
    render, render_raw, render_raw_into, render_string, render_with, render_with_alts, vals,
    Delimiters, FormatValue, Model,
};

fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(std::env::var_os("CARGO_MANIFEST_DIR").unwrap());
    path.push("tests/fixtures");
    path.push(name);
    fs::read_to_string(path).expect("Error reading fixture")
}

#[test]
fn letter() {
    let values = HashMap::from([
        ("FIRSTNAME", "Bob"),
        ("LASTNAME", "Anderson"),
        ("LISTNAME", "Python Club"),
        ("T1", "Jinja"),
        ("T2", "SimpleTemplate"),
        ("FROM", "nanfang"),
        ("COMPANY", "nanfang"),
        ("EMAIL", "nanfang05@gmail.com"),
    ]);

    assert_eq!(
        render(&fixture("letter.txt"), values),
        fixture("letter.expected.txt")
    );
}

#[test]
fn letter_into_writer() {
    let values = [("firstname", "Bob"), ("lastname", "Anderson")];
    let mut buf = Vec::new();
    render_raw_into(
        &mut buf,
        "##firstname## ##lastname##",
        &values,
        &Delimiters::default(),
    )
    .unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "Bob Anderson");
}

#[test]
fn extra_sharp_before_token() {
    assert_eq!(
        render_string("test ###name## Sucks!", &[("name", "Jinja")], "##", "##").unwrap(),
        "test #Jinja Sucks!"
    );
    assert_eq!(render("test ###name## Sucks!", [("name", "Jinja")]), "test #Jinja Sucks!");
    assert_eq!(render("test ####name## Sucks!", [("name", "Jinja")]), "test ##Jinja Sucks!");
    assert_eq!(render("###No##", [("No", 1)]), "#1");
}

#[test]
fn retains_illegal_sharps() {
    assert_eq!(
        render(
            "Hello ##firstname##, ##welcome ####to our ##clubname#### ###",
            [("firstname", "Bob"), ("clubname", "NBA Club")],
        ),
        "Hello Bob, ##welcome ####to our NBA Club## ###"
    );
}

#[test]
fn sharps_only() {
    let empty: [(&str, &str); 0] = [];
    assert_eq!(render("#", empty), "#");
    assert_eq!(render("###", empty), "###");
    assert_eq!(render("####", empty), "####");
}

#[test]
fn concatenated_tokens() {
    assert_eq!(
        render(
            "Your user ID is ##No_prefix####No##",
            [("No_prefix", json!("NBA-")), ("No", json!(1))],
        ),
        "Your user ID is NBA-1"
    );
}

#[test]
fn blank_alts() {
    assert_eq!(
        render_with_alts(
            "Your name is ##firstname##.##lastname##",
            HashMap::<String, serde_json::Value>::new(),
            [("firstname", json!(null)), ("lastname", json!(""))],
        ),
        "Your name is ."
    );
}

#[test]
fn surplus_values_ignored() {
    assert_eq!(
        render(
            "Hello ##firstname##, welcome to our ##clubname##",
            [
                ("firstname", json!("Bob")),
                ("lastname", json!("Brown")),
                ("clubname", json!("NBA Club")),
                ("age", json!(26)),
            ],
        ),
        "Hello Bob, welcome to our NBA Club"
    );
}

#[test]
fn names_with_punctuation() {
    assert_eq!(
        render(
            "Hello ##first-name## ##last name##, welcome to our ##club.name##",
            [
                ("first-name", "Bob"),
                ("last name", "Anderson"),
                ("club.name", "NBA Club"),
            ],
        ),
        "Hello Bob Anderson, welcome to our NBA Club"
    );
}

#[derive(Clone, Debug)]
enum Field {
    Date { year: u16, month: u8, day: u8 },
    Other(Option<String>),
}

impl FormatValue for Field {
    fn format_value(&self) -> String {
        match self {
            Self::Date { year, month, day } => format!("{year:04}-{month:02}-{day:02}"),
            Self::Other(value) => value.format_value(),
        }
    }
}

#[test]
fn custom_formatter() {
    let values = [(
        "birth-date",
        Field::Date {
            year: 2011,
            month: 4,
            day: 1,
        },
    )];
    let alts = [("nickname", Field::Other(None))];

    let year_only = |field: &Field| match field {
        Field::Date { year, .. } => year.to_string(),
        other => other.format_value(),
    };

    assert_eq!(
        render_with(
            "Hello ##nickname##, you are born in ##birth-date##",
            values.clone(),
            alts.clone(),
            year_only,
        ),
        "Hello , you are born in 2011"
    );
    assert_eq!(
        render_with_alts("born ##Birth-Date##", values, alts),
        "born 2011-04-01"
    );
}

#[test]
fn case_sensitive_model() {
    let values: HashMap<String, i64> = HashMap::from([("Total".to_string(), 42)]);
    let model = Model::new(values);

    assert_eq!(
        render_raw("##Total## ##total##", &model, &Delimiters::SHARPS),
        "42 ##total##"
    );
}

#[test]
fn closure_resolver_with_custom_delimiters() {
    let delimiters = Delimiters::new("${", "}").unwrap();
    let env = vals(|key| match key {
        "HOME" => Some("/home/bob".to_string()),
        _ => None,
    });

    assert_eq!(
        render_raw("${HOME}/bin:${PATH}", &env, &delimiters),
        "/home/bob/bin:${PATH}"
    );
}

#[test]
fn delimiters_from_config() {
    let delimiters: Delimiters = serde_json::from_str(r#"{ "open": "<<", "close": ">>" }"#).unwrap();

    assert_eq!(
        render_raw("<<<a>> <<b>>", &[("a", "1")], &delimiters),
        "<1 <<b>>"
    );
}
