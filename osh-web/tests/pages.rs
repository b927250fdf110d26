use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use osh_web::router::app_router;
use osh_web::state::AppState;

const OS_ID: &str = "BD2021113R7R87P";

fn app() -> axum::Router {
    app_router(AppState::new())
}

async fn get(uri: &str) -> Result<(StatusCode, String)> {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

#[tokio::test]
async fn root_redirects_to_the_sample_facility() -> Result<()> {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, format!("/facilities/{OS_ID}"));
    Ok(())
}

#[tokio::test]
async fn facility_page_renders_identity_and_provenance() -> Result<()> {
    let (status, body) = get(&format!("/facilities/{OS_ID}")).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(OS_ID));
    assert!(body.contains("Zaber &amp; Zubair Fabrics Ltd"));
    assert!(body.contains("CLAIMED PROFILE"));
    assert!(body.contains("8,281"));
    assert!(body.contains("+122 data sources"));
    assert!(body.contains("arcgisonline.com"));
    // Zoom-in from the default level links to z=17.
    assert!(body.contains("z=17"));
    Ok(())
}

#[tokio::test]
async fn unknown_facility_is_not_found() -> Result<()> {
    let (status, _) = get("/facilities/XX0000000000000").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn accordions_start_collapsed_and_open_via_query() -> Result<()> {
    let (_, collapsed) = get(&format!("/facilities/{OS_ID}")).await?;
    assert!(!collapsed.contains("FEM Assessment"));
    assert!(!collapsed.contains("Name in Native Language"));

    let (_, open) = get(&format!("/facilities/{OS_ID}?open=assessments")).await?;
    assert!(open.contains("FEM Assessment"));
    assert!(open.contains("amfori BEPI Audit"));
    // Group attribution footer for the amfori column.
    assert!(open.contains("October 28, 2023"));

    let (_, claimed) = get(&format!("/facilities/{OS_ID}?claimed=claimed")).await?;
    assert!(claimed.contains("Name in Native Language"));
    assert!(claimed.contains("Minimum Order Quantity"));
    Ok(())
}

#[tokio::test]
async fn multiple_partnership_panels_open_simultaneously() -> Result<()> {
    let (_, body) = get(&format!("/facilities/{OS_ID}?open=assessments,environment")).await?;
    assert!(body.contains("FEM Assessment"));
    assert!(body.contains("Estimated Annual Emissions"));
    // Closing link for an open panel drops it from the open set.
    assert!(body.contains("open=environment#section-assessments"));
    Ok(())
}

#[tokio::test]
async fn contributors_route_honors_the_htmx_header() -> Result<()> {
    let response = app()
        .oneshot(
            Request::builder()
                .uri(format!("/facilities/{OS_ID}/contributors"))
                .header("HX-Request", "true")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let partial = String::from_utf8(to_bytes(response.into_body(), usize::MAX).await?.to_vec())?;
    assert!(!partial.contains("<html"));
    assert!(partial.contains("Uploaded via Lists (7)"));
    assert!(partial.contains("Individual Contributions (2)"));

    let (status, full) = get(&format!("/facilities/{OS_ID}/contributors")).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(full.contains("<html"));
    assert!(full.contains("Uploaded via Lists (7)"));
    Ok(())
}

#[tokio::test]
async fn contributors_panel_orders_most_recent_first() -> Result<()> {
    let (_, body) = get(&format!("/facilities/{OS_ID}/contributors")).await?;
    // Sainsbury's latest upload (Nov 12, 2025) precedes M&S (Nov 5, 2025).
    let sainsburys = body.find("Sainsbury&#x27;s").expect("Sainsbury's listed");
    let ms = body.find("Marks &amp; Spencer").expect("M&S listed");
    assert!(sainsburys < ms);
    // The claimed supplier contributed in 2022 and lands last among
    // individual contributions.
    let os_hub = body.find("OS Hub").expect("OS Hub listed");
    let supplier = body
        .rfind("Zaber and Zubair Fabrics Ltd")
        .expect("supplier listed");
    assert!(os_hub < supplier);
    Ok(())
}

#[tokio::test]
async fn recent_view_flattens_the_contributor_list() -> Result<()> {
    let (status, body) = get(&format!("/facilities/{OS_ID}/contributors?view=recent")).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Uploaded via Lists ("));
    // Flat ordering interleaves individual contributors by recency: OS Hub
    // (Aug 2025) lands between H&M's upload (Aug 20, 2025) and SLCP's
    // (Apr 15, 2025).
    let hm = body.find("H&amp;M Group").expect("H&M listed");
    let os_hub = body.find("OS Hub").expect("OS Hub listed");
    let slcp = body.find("SLCP").expect("SLCP listed");
    assert!(hm < os_hub);
    assert!(os_hub < slcp);
    Ok(())
}

#[tokio::test]
async fn field_sources_drawer_renders_generated_entries() -> Result<()> {
    let (status, body) = get(&format!("/facilities/{OS_ID}/sources?field=sector")).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("All Data Contributions"));
    assert!(body.contains("Industry / Sectors"));
    assert!(body.contains("Contributions (51)"));
    assert!(body.contains("General Merchandise"));

    // Generation is seeded, so a second render is byte-identical.
    let (_, again) = get(&format!("/facilities/{OS_ID}/sources?field=sector")).await?;
    assert_eq!(body, again);

    let (missing, _) = get(&format!("/facilities/{OS_ID}/sources?field=bogus")).await?;
    assert_eq!(missing, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn data_export_returns_the_bundle_as_json() -> Result<()> {
    let (status, body) = get(&format!("/facilities/{OS_ID}/data.json")).await?;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(value["facility"]["os_id"], OS_ID);
    assert_eq!(value["contributors"].as_array().map(Vec::len), Some(9));
    Ok(())
}
