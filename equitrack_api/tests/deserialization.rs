use equitrack_api::types::{Company, Participation, Shareholder};
use rust_decimal_macros::dec;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn shareholder_fixture_round_trips() {
    let shareholders: Vec<Shareholder> =
        serde_json::from_str(&load_fixture("shareholders.json")).unwrap();
    assert_eq!(shareholders.len(), 2);
    assert_eq!(shareholders[1].id, 2);
    assert_eq!(shareholders[1].email, "joao.souza@example.com");

    let json = serde_json::to_value(&shareholders[0]).unwrap();
    assert_eq!(json["nome"], "Maria Silva");
    assert!(json.get("name").is_none());
}

#[test]
fn company_fixture_parses_founding_date() {
    let companies: Vec<Company> = serde_json::from_str(&load_fixture("companies.json")).unwrap();
    assert_eq!(companies[0].founded_on.to_string(), "2010-05-20");

    let json = serde_json::to_value(&companies[0]).unwrap();
    assert_eq!(json["endereco"], "Av. Paulista, 1000 - São Paulo");
    assert_eq!(json["data_fundacao"], "2010-05-20");
}

#[test]
fn participation_fixture_parses_decimal_string() {
    let participations: Vec<Participation> =
        serde_json::from_str(&load_fixture("participations.json")).unwrap();
    assert_eq!(participations[0].percentage, dec!(30.00));
    assert_eq!(participations[1].percentage, dec!(45.50));
    assert_eq!(participations[0].company_name, "Acme Participações S.A.");
}

#[test]
fn participation_accepts_numeric_percentage() {
    // Some backends serialize DecimalField as a bare number; both forms parse.
    let json = r#"{
        "id": 1,
        "acionista": 1,
        "empresa": 2,
        "percentual": 12.5,
        "criado_em": "2024-03-01T12:00:00Z",
        "acionista_nome": "Maria Silva",
        "empresa_nome": "Beta Holdings Ltda."
    }"#;
    let p: Participation = serde_json::from_str(json).unwrap();
    assert_eq!(p.percentage, dec!(12.5));
}
