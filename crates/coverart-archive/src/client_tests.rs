// SPDX-License-Identifier: GPL-3.0-or-later

#[cfg(test)]
mod tests {
    use crate::{CoverArtClient, CoverArtError, CoverSide, Mbid, ResourceType, ThumbnailSize};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const OK_COMPUTER_RELEASE_MBID: &str = "4dbf5678-7a31-406a-abbe-232f8ac2cd63";
    const OK_COMPUTER_MBID: &str = "b1392450-e666-3926-a536-22c65f834433";

    fn release_listing() -> serde_json::Value {
        serde_json::json!({
            "release": "https://musicbrainz.org/release/4dbf5678-7a31-406a-abbe-232f8ac2cd63",
            "images": [
                {
                    "id": 1111,
                    "image": "https://coverartarchive.org/release/4dbf5678/1111.jpg",
                    "front": true,
                    "back": false,
                    "approved": true,
                    "types": ["Front"],
                    "thumbnails": {
                        "250": "https://coverartarchive.org/release/4dbf5678/1111-250.jpg",
                        "500": "https://coverartarchive.org/release/4dbf5678/1111-500.jpg"
                    }
                },
                {
                    "id": 2222,
                    "image": "https://coverartarchive.org/release/4dbf5678/2222.jpg",
                    "front": false,
                    "back": false,
                    "approved": true,
                    "types": ["Booklet"],
                    "thumbnails": {}
                },
                {
                    "id": "3333",
                    "image": "https://coverartarchive.org/release/4dbf5678/3333.jpg",
                    "front": false,
                    "back": true,
                    "approved": false,
                    "types": ["Back"],
                    "thumbnails": {}
                }
            ]
        })
    }

    async fn client_for(mock_server: &MockServer) -> CoverArtClient {
        CoverArtClient::builder()
            .base_url(mock_server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_release() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/release/{}", OK_COMPUTER_RELEASE_MBID)))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(release_listing()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let cover_art = client
            .fetch("release", OK_COMPUTER_RELEASE_MBID)
            .await
            .unwrap();

        assert_eq!(cover_art.resource_type(), ResourceType::Release);
        assert_eq!(cover_art.mbid().as_str(), OK_COMPUTER_RELEASE_MBID);
        assert_eq!(
            cover_art.release_url(),
            Some("https://musicbrainz.org/release/4dbf5678-7a31-406a-abbe-232f8ac2cd63")
        );
        assert_eq!(cover_art.len(), 3);

        let ids: Vec<_> = cover_art.images().iter().map(|image| image.id()).collect();
        assert_eq!(ids, vec![Some("1111"), Some("2222"), Some("3333")]);

        let front = cover_art.front_image().unwrap();
        assert_eq!(front.id(), Some("1111"));
        assert_eq!(
            front.url_for(ThumbnailSize::Large),
            "https://coverartarchive.org/release/4dbf5678/1111-500.jpg"
        );

        let back = cover_art.back_image().unwrap();
        assert_eq!(back.id(), Some("3333"));
        assert!(!back.is_approved());
    }

    #[tokio::test]
    async fn test_fetch_release_group() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/release-group/{}", OK_COMPUTER_MBID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "images": [{
                    "image": "https://coverartarchive.org/release-group/b1392450/front.jpg",
                    "front": true,
                    "back": false,
                    "approved": true
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let mbid = Mbid::parse(OK_COMPUTER_MBID).unwrap();
        let cover_art = client.fetch_release_group(&mbid).await.unwrap();

        assert_eq!(cover_art.resource_type(), ResourceType::ReleaseGroup);
        assert_eq!(cover_art.release_url(), None);
        assert_eq!(cover_art.len(), 1);
        assert!(cover_art.front_image().is_ok());
        assert!(matches!(
            cover_art.back_image(),
            Err(CoverArtError::NotFound(CoverSide::Back))
        ));
    }

    #[tokio::test]
    async fn test_missing_images_field_yields_empty_listing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/release/{}", OK_COMPUTER_RELEASE_MBID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "release": "https://musicbrainz.org/release/4dbf5678-7a31-406a-abbe-232f8ac2cd63"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let mbid = Mbid::parse(OK_COMPUTER_RELEASE_MBID).unwrap();
        let cover_art = client.fetch_release(&mbid).await.unwrap();

        assert!(cover_art.is_empty());
        assert!(matches!(
            cover_art.front_image(),
            Err(CoverArtError::NotFound(CoverSide::Front))
        ));
        assert!(matches!(
            cover_art.back_image(),
            Err(CoverArtError::NotFound(CoverSide::Back))
        ));
    }

    #[tokio::test]
    async fn test_not_found_is_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/release/{}", OK_COMPUTER_RELEASE_MBID)))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let result = client.fetch("release", OK_COMPUTER_RELEASE_MBID).await;

        match result {
            Err(CoverArtError::ServerError { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "Not Found");
            }
            other => panic!("expected ServerError, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_200_success_status_is_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/release/{}", OK_COMPUTER_RELEASE_MBID)))
            .respond_with(ResponseTemplate::new(203).set_body_json(release_listing()))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let result = client.fetch("release", OK_COMPUTER_RELEASE_MBID).await;

        assert!(matches!(
            result,
            Err(CoverArtError::ServerError { status: 203, .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/release/{}", OK_COMPUTER_RELEASE_MBID)))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let result = client.fetch("release", OK_COMPUTER_RELEASE_MBID).await;

        assert!(matches!(result, Err(CoverArtError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_invalid_arguments_send_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(release_listing()))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;

        let bad_type = client.fetch("artist", OK_COMPUTER_RELEASE_MBID).await;
        assert!(matches!(bad_type, Err(CoverArtError::InvalidArgument(_))));

        let bad_mbid = client
            .fetch("release", "4dbf5678-7a31-406a-abbe-232f8az2cd63")
            .await;
        assert!(matches!(bad_mbid, Err(CoverArtError::InvalidArgument(_))));

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests.is_empty(), "validation failures must not hit the network");
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_ignored() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/release/{}", OK_COMPUTER_RELEASE_MBID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(release_listing()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = CoverArtClient::builder()
            .base_url(format!("{}/", mock_server.uri()))
            .build()
            .unwrap();

        assert_eq!(client.base_url(), mock_server.uri());
        let cover_art = client
            .fetch("release", OK_COMPUTER_RELEASE_MBID)
            .await
            .unwrap();
        assert_eq!(cover_art.len(), 3);
    }

    #[test]
    fn test_default_client_targets_public_archive() {
        assert_eq!(
            CoverArtClient::new().unwrap().base_url(),
            crate::COVER_ART_ARCHIVE_BASE
        );
        assert_eq!(
            CoverArtClient::default().base_url(),
            crate::COVER_ART_ARCHIVE_BASE
        );
    }

    #[tokio::test]
    async fn test_transport_error() {
        // Nothing listens on port 9 on the loopback interface.
        let client = CoverArtClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();

        let result = client.fetch("release", OK_COMPUTER_RELEASE_MBID).await;

        assert!(matches!(result, Err(CoverArtError::Transport(_))));
    }
}
