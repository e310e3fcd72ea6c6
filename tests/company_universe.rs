// tests/company_universe.rs
//! Company universe built from mock ranked-CSV endpoints: template paging,
//! outage tolerance, and the disabled short-circuit.

use httpmock::prelude::*;

use job_radar::companies::load_company_universe;
use job_radar::config::CompanyUniverseConfig;
use job_radar::ingest::http_client;

fn universe_cfg(server: &MockServer) -> CompanyUniverseConfig {
    CompanyUniverseConfig {
        global_top_n: 200,
        regional_top_n: 100,
        global_url_templates: vec![server.url("/global-{page}.csv")],
        regional_url_templates: vec![server.url("/regional.csv")],
        extra_companies: vec!["Nubank".to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn builds_all_three_sets_from_csv_pages() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/global-1.csv");
        then.status(200).body("Rank,Name\n1,Apple Inc.\n2,Microsoft Corporation\n");
    });
    server.mock(|when, then| {
        when.method(GET).path("/global-2.csv");
        then.status(200).body("Rank,Name\n101,Toyota Motor Corporation\n");
    });
    server.mock(|when, then| {
        when.method(GET).path("/regional.csv");
        then.status(200).body("Rank,Name\n1,Petrobras\n2,Vale S.A.\n");
    });

    let u = load_company_universe(&http_client(), &universe_cfg(&server)).await;
    assert!(u.global.contains("apple"));
    assert!(u.global.contains("toyota motor"));
    assert!(u.regional.contains("petrobras"));
    assert!(u.extra.contains("nubank"));
}

#[tokio::test]
async fn a_down_list_endpoint_yields_an_empty_but_valid_universe() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path_contains("csv");
        then.status(502);
    });

    let u = load_company_universe(&http_client(), &universe_cfg(&server)).await;
    assert!(u.global.is_empty());
    assert!(u.regional.is_empty());
    // the explicit extra list never depends on the network
    assert!(u.extra.contains("nubank"));
}

#[tokio::test]
async fn disabled_universe_skips_all_fetches() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path_contains("csv");
        then.status(200).body("Rank,Name\n1,Apple Inc.\n");
    });

    let cfg = CompanyUniverseConfig {
        enabled: false,
        ..universe_cfg(&server)
    };
    let u = load_company_universe(&http_client(), &cfg).await;
    assert!(u.is_empty());
    mock.assert_hits(0);
}
