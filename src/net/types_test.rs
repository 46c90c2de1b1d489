use super::*;

#[test]
fn boisson_parses_active_and_is_active() {
    let legacy = r#"{"id":1,"nom":"Bissap","prixUnitaire":500.0,"seuilAlerte":10,"active":true}"#;
    let parsed: Boisson = serde_json::from_str(legacy).expect("boisson");
    assert!(parsed.is_active);

    let aliased = r#"{"id":1,"nom":"Bissap","prixUnitaire":500.0,"seuilAlerte":10,"isActive":false}"#;
    let parsed: Boisson = serde_json::from_str(aliased).expect("boisson");
    assert!(!parsed.is_active);
}

#[test]
fn mouvement_maps_the_type_field() {
    let json = r#"{"id":9,"type":"SORTIE","dateMouvement":"2025-03-01","quantite":4}"#;
    let parsed: Mouvement = serde_json::from_str(json).expect("mouvement");
    assert_eq!(parsed.type_mouvement, "SORTIE");
    assert!(parsed.raison.is_none());
}

#[test]
fn utilisateur_never_serializes_an_absent_password() {
    let user = Utilisateur {
        id: Some(2),
        first_name: "Awa".to_owned(),
        last_name: "Diop".to_owned(),
        email: "awa@example.test".to_owned(),
        role: Role::Employee,
        mot_de_passe: None,
        is_active: true,
        first_login: false,
        created_at: None,
        updated_at: None,
    };
    let json = serde_json::to_string(&user).expect("json");
    assert!(!json.contains("motDePasse"));
    assert!(json.contains("\"role\":\"EMPLOYEE\""));
}

#[test]
fn trend_parses_screaming_variants() {
    assert_eq!(serde_json::from_str::<Trend>("\"UP\"").unwrap(), Trend::Up);
    assert_eq!(serde_json::from_str::<Trend>("\"STABLE\"").unwrap(), Trend::Stable);
}

#[test]
fn dashboard_statistics_tolerates_missing_sections() {
    let parsed: DashboardStatisticsDto = serde_json::from_str("{}").expect("stats");
    assert!(parsed.stock_alerts.is_none());

    let json = r#"{
        "stockAlerts": [{
            "beverageName": "Bissap",
            "currentStockLevel": 3,
            "thresholdLevel": 10,
            "alertSeverityLevel": "CRITICAL"
        }]
    }"#;
    let parsed: DashboardStatisticsDto = serde_json::from_str(json).expect("stats");
    let alerts = parsed.stock_alerts.expect("alerts");
    assert_eq!(alerts[0].beverage_name, "Bissap");
}

#[test]
fn change_password_request_uses_api_field_names() {
    let body = ChangePasswordRequest {
        old_password: "old".to_owned(),
        new_password: "new".to_owned(),
    };
    let json = serde_json::to_string(&body).expect("json");
    assert!(json.contains("\"oldPassword\":\"old\""));
    assert!(json.contains("\"newPassword\":\"new\""));
}
