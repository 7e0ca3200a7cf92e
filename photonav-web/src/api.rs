use photonav_common::{parse_gallery, parse_product, Photo, Product};

async fn fetch_text(url: &str) -> Result<String, String> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err("Not found.".to_string());
    }
    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }

    resp.text().await.map_err(|e| format!("Read error: {e}"))
}

/// Fetch the gallery document list, display-ordered
pub async fn fetch_gallery(url: &str) -> Result<Vec<Photo>, String> {
    let body = fetch_text(url).await?;
    let photos = parse_gallery(&body).map_err(|e| e.to_string())?;
    tracing::info!("Loaded {} gallery photos", photos.len());
    Ok(photos)
}

/// Fetch one product document with its images
pub async fn fetch_product(url: &str) -> Result<Product, String> {
    let body = fetch_text(url).await?;
    parse_product(&body).map_err(|e| e.to_string())
}
