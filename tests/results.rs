use std::collections::BTreeMap;

use escrutini::apportionment::total_assigned;
use escrutini::models::{Demarcacio, Partit, Poblacio};
use escrutini::results::ResultsService;
use escrutini::{ElectionStore, StoreError};

fn tally(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
    pairs.iter().map(|(p, v)| (p.to_string(), *v)).collect()
}

/// One demarcació (Girona, 17 seats), four parties, two municipalities.
async fn seeded_service() -> ResultsService {
    let store = ElectionStore::open_in_memory().await.unwrap();

    store
        .insert_demarcacio(&Demarcacio { nom: "Girona".to_string(), escons: 17 })
        .await
        .unwrap();
    store.insert_comarca("Gironès").await.unwrap();

    for poblacio in ["Girona", "Salt"] {
        store
            .insert_poblacio(&Poblacio {
                poblacio: poblacio.to_string(),
                comarca: "Gironès".to_string(),
                demarcacio: "Girona".to_string(),
            })
            .await
            .unwrap();
    }

    for (curt, nom, color) in [
        ("CUP", "Candidatura d'Unitat Popular", "#ffed00"),
        ("ERC", "Esquerra Republicana de Catalunya", "#ffb232"),
        ("Junts", "Junts per Catalunya", "#00c3b2"),
        ("PSC", "Partit dels Socialistes de Catalunya", "#e73b39"),
    ] {
        store
            .insert_partit(&Partit {
                curt: curt.to_string(),
                nom: nom.to_string(),
                color: color.to_string(),
            })
            .await
            .unwrap();
        store.insert_candidatura(curt, "Girona").await.unwrap();
    }

    store
        .set_vots("Girona", &tally(&[("ERC", 40_000), ("Junts", 38_000), ("PSC", 25_000)]))
        .await
        .unwrap();
    store
        .set_vots("Salt", &tally(&[("ERC", 8_000), ("Junts", 5_000), ("PSC", 9_000)]))
        .await
        .unwrap();

    ResultsService::new(store)
}

#[tokio::test]
async fn test_apportion_assigns_every_seat() {
    let service = seeded_service().await;

    let assignacio = service.apportion("Girona").await.unwrap();
    assert_eq!(total_assigned(&assignacio), 17);

    // ERC 48k, Junts 43k, PSC 34k: the strongest list wins the most seats
    assert!(assignacio["ERC"] >= assignacio["Junts"]);
    assert!(assignacio["Junts"] >= assignacio["PSC"]);

    // CUP ran but has no votes loaded yet; it is part of the assignment at zero
    assert_eq!(assignacio["CUP"], 0);
}

#[tokio::test]
async fn test_apportion_persists_assignment() {
    let service = seeded_service().await;

    let assignacio = service.apportion("Girona").await.unwrap();

    let series = service.chart_series("Girona").await.unwrap();
    let stored: BTreeMap<String, i64> = series.iter().map(|p| (p.name.clone(), p.y)).collect();
    assert_eq!(stored, assignacio);
}

#[tokio::test]
async fn test_apportion_is_idempotent() {
    let service = seeded_service().await;

    let first = service.apportion("Girona").await.unwrap();
    let second = service.apportion("Girona").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_apportion_unknown_demarcacio() {
    let service = seeded_service().await;

    let err = service.apportion("Tarragona").await.unwrap_err();
    assert!(matches!(err, StoreError::DemarcacioNotFound(_)));
}

#[tokio::test]
async fn test_chart_series_shape_and_order() {
    let service = seeded_service().await;
    service.apportion("Girona").await.unwrap();

    let series = service.chart_series("Girona").await.unwrap();
    assert_eq!(series.len(), 4);

    // Seats descending, short code as the stable tie-break
    for pair in series.windows(2) {
        assert!(pair[0].y > pair[1].y || (pair[0].y == pair[1].y && pair[0].name < pair[1].name));
    }

    // Party colors travel with the points
    let erc = series.iter().find(|p| p.name == "ERC").unwrap();
    assert_eq!(erc.color, "#ffb232");

    // The serialized payload uses the chart's point keys
    let json = serde_json::to_value(&series[0]).unwrap();
    assert!(json.get("name").is_some());
    assert!(json.get("y").is_some());
    assert!(json.get("color").is_some());
}

#[tokio::test]
async fn test_chart_series_unknown_demarcacio() {
    let service = seeded_service().await;

    let err = service.chart_series("Enlloc").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_chart_series_total_matches_single_demarcacio() {
    let service = seeded_service().await;
    service.apportion("Girona").await.unwrap();

    // With one demarcació assigned, the aggregate is that demarcació
    let single: BTreeMap<String, i64> = service
        .chart_series("Girona")
        .await
        .unwrap()
        .into_iter()
        .map(|p| (p.name, p.y))
        .collect();
    let total: BTreeMap<String, i64> = service
        .chart_series_total()
        .await
        .unwrap()
        .into_iter()
        .map(|p| (p.name, p.y))
        .collect();

    assert_eq!(total, single);
}

#[tokio::test]
async fn test_progress() {
    let service = seeded_service().await;

    let before = service.progress().await.unwrap();
    assert_eq!(before.assignades, 0);
    assert_eq!(before.total, 1);

    service.apportion("Girona").await.unwrap();

    let after = service.progress().await.unwrap();
    assert_eq!(after.assignades, 1);
    assert_eq!(after.total, 1);
}
