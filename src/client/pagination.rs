//! Offset pagination over the organization list
//!
//! The list endpoint pages with `offset`/`limit` and reports a `next` link
//! while more records remain. There is no total count, so pages are walked
//! sequentially.

use log::debug;

use super::models::Organization;
use super::orgs::OrgsApi;
use super::requests::GetOrgsRequest;
use crate::error::Result;

/// Maximum page size accepted by the list endpoint.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Fetch every organization matching `request`.
///
/// Starts at the request's `offset` (default 0) and uses its `limit` as the
/// page size (default and cap [`MAX_PAGE_SIZE`]). Stops on a short or empty
/// page, or when the server omits the `next` link.
pub async fn fetch_all_orgs<A: OrgsApi + ?Sized>(
    api: &A,
    request: &GetOrgsRequest,
) -> Result<Vec<Organization>> {
    let page_size = request.limit.unwrap_or(MAX_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let mut offset = request.offset.unwrap_or(0);
    let mut all = Vec::new();

    loop {
        let page_request = request.clone().offset(offset).limit(page_size);
        let page = api.get_orgs(&page_request, None).await?;

        let count = page.orgs.len();
        let has_next = page
            .links
            .as_ref()
            .map(|links| links.next.is_some())
            .unwrap_or(true);
        debug!(
            "Fetched {} organizations at offset {} (next link: {})",
            count, offset, has_next
        );

        all.extend(page.orgs);

        if count < page_size as usize || !has_next {
            break;
        }
        offset += count as u32;
    }

    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::orgs::OrgsClient;

    fn page(names: &[&str], next: bool) -> String {
        let orgs: Vec<serde_json::Value> = names
            .iter()
            .map(|n| serde_json::json!({"id": format!("id-{}", n), "name": n}))
            .collect();
        let mut links = serde_json::json!({"self": "/api/v2/orgs"});
        if next {
            links["next"] = serde_json::json!("/api/v2/orgs?offset=2&limit=2");
        }
        serde_json::json!({"links": links, "orgs": orgs}).to_string()
    }

    #[tokio::test]
    async fn test_fetch_all_walks_pages_until_short_page() {
        let mock = MockTransport::new()
            .with_response(&page(&["a", "b"], true))
            .await
            .with_response(&page(&["c", "d"], true))
            .await
            .with_response(&page(&["e"], false))
            .await;
        let client = OrgsClient::new(mock);

        let orgs = fetch_all_orgs(&client, &GetOrgsRequest::new().limit(2))
            .await
            .unwrap();
        let names: Vec<&str> = orgs.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);

        let captured = client.base().captured().await;
        assert_eq!(captured.len(), 3);
        let offsets: Vec<String> = captured
            .iter()
            .map(|c| {
                c.query
                    .iter()
                    .find(|(k, _)| *k == "offset")
                    .map(|(_, v)| v.clone())
                    .unwrap()
            })
            .collect();
        assert_eq!(offsets, vec!["0", "2", "4"]);
    }

    #[tokio::test]
    async fn test_fetch_all_stops_without_next_link() {
        let mock = MockTransport::new()
            .with_response(&page(&["a", "b"], false))
            .await;
        let client = OrgsClient::new(mock);

        let orgs = fetch_all_orgs(&client, &GetOrgsRequest::new().limit(2))
            .await
            .unwrap();
        assert_eq!(orgs.len(), 2);
        assert_eq!(client.base().captured().await.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_all_keeps_filters_and_caps_page_size() {
        let mock = MockTransport::new().with_response(&page(&[], false)).await;
        let client = OrgsClient::new(mock);

        let request = GetOrgsRequest::new().limit(500).user_id("u1");
        let orgs = fetch_all_orgs(&client, &request).await.unwrap();
        assert!(orgs.is_empty());

        let captured = client.base().captured().await;
        assert!(captured[0].query.contains(&("limit", "100".to_string())));
        assert!(captured[0].query.contains(&("userID", "u1".to_string())));
    }
}
