//! Integration tests for the param_scout application.
//!
//! These tests verify the library API using a mock HTTP server.
//! They do not make real network requests, so no archive traffic is generated.
//!
//! The retry tests wait out the real five-second retry delay, so parts of this
//! suite take tens of seconds of wall-clock time.

#[cfg(test)]
mod tests {
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use tempfile::TempDir;

    use param_scout::{
        fetch_url_content, run, Config, FetchError, OnExhausted, UserAgentPool,
    };

    /// Successful fetch returns the response body unchanged
    #[tokio::test]
    async fn test_fetch_returns_body_on_success() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/cdx")).respond_with(
                status_code(200).body("http://example.com/a?x=1\nhttp://example.com/b\n"),
            ),
        );

        let client = reqwest::Client::new();
        let pool = UserAgentPool::builtin();
        let url = format!("http://{}/cdx", server.addr());

        let body = fetch_url_content(&client, &url, &pool)
            .await
            .expect("Fetch should succeed");
        assert!(body.contains("http://example.com/a?x=1"));
        assert!(body.contains("http://example.com/b"));
    }

    /// Every request carries a User-Agent drawn from the pool
    #[tokio::test]
    async fn test_fetch_sends_pool_user_agent() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let ua_file = temp_dir.path().join("agents.txt");
        std::fs::write(&ua_file, "param-scout-test/1.0\n").expect("Failed to write agents file");

        // A single-identity pool makes the header deterministic
        let pool = UserAgentPool::load(ua_file.to_str()).await;
        assert_eq!(pool.len(), 1);

        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/cdx"),
                request::headers(contains(("user-agent", "param-scout-test/1.0"))),
            ])
            .respond_with(status_code(200).body("ok")),
        );

        let client = reqwest::Client::new();
        let url = format!("http://{}/cdx", server.addr());

        let body = fetch_url_content(&client, &url, &pool)
            .await
            .expect("Fetch should succeed");
        assert_eq!(body, "ok");
    }

    /// Two refusals then a success: the fetch recovers on the third attempt.
    ///
    /// Sleeps through two real retry delays (about ten seconds).
    #[tokio::test]
    async fn test_fetch_retries_until_success() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/cdx"))
                .times(3)
                .respond_with(cycle![
                    status_code(500),
                    status_code(500),
                    status_code(200).body("recovered"),
                ]),
        );

        let client = reqwest::Client::new();
        let pool = UserAgentPool::builtin();
        let url = format!("http://{}/cdx", server.addr());

        let body = fetch_url_content(&client, &url, &pool)
            .await
            .expect("Fetch should recover within the retry budget");
        assert_eq!(body, "recovered");
    }

    /// A hostname that never answers is given exactly three attempts.
    ///
    /// Sleeps through two real retry delays (about ten seconds).
    #[tokio::test]
    async fn test_fetch_exhausts_after_three_attempts() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/cdx"))
                .times(3)
                .respond_with(status_code(503)),
        );

        let client = reqwest::Client::new();
        let pool = UserAgentPool::builtin();
        let url = format!("http://{}/cdx", server.addr());

        let err = fetch_url_content(&client, &url, &pool)
            .await
            .expect_err("Fetch should exhaust its retries");
        match err {
            FetchError::RetriesExhausted { attempts, .. } => assert_eq!(attempts, 3),
            other => panic!("Expected retry exhaustion, got: {}", other),
        }
    }

    /// Full pipeline: CDX records in, placeholder-substituted URLs on disk out
    #[tokio::test]
    async fn test_full_run_writes_placeholder_urls() {
        let server = Server::run();
        let cdx_body = concat!(
            "https://example.com/products?id=123&utm=abc\n",
            "https://example.com:443/products?id=456&utm=xyz\n",
            "https://example.com/search?q=test\n",
            "https://example.com/banner.jpg?v=9\n",
            "https://example.com/plain\n",
            "not a url\n",
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/cdx"),
                request::query(url_decoded(contains(("url", "example.com/*")))),
                request::query(url_decoded(contains(("output", "txt")))),
            ])
            .respond_with(status_code(200).body(cdx_body)),
        );

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = Config {
            domains: vec!["example.com".to_string()],
            output: temp_dir.path().join("results"),
            archive_url: format!("http://{}/cdx", server.addr()),
            ..Default::default()
        };

        let report = run(config).await.expect("Run should complete");

        assert_eq!(report.domains.len(), 1);
        assert_eq!(report.skipped_domains, 0);
        assert_eq!(report.total_urls, 2);
        assert_eq!(report.output_dir, temp_dir.path().join("results"));

        let summary = &report.domains[0];
        assert_eq!(summary.hostname, "example.com");
        assert_eq!(summary.url_count, 2);
        assert_eq!(
            summary.output_path,
            temp_dir.path().join("results").join("example.com.txt")
        );

        // The port variant collapses into the first record after substitution;
        // the static asset, the query-less URL, and the junk line are dropped
        let contents =
            std::fs::read_to_string(&summary.output_path).expect("Results file should exist");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "https://example.com/products?id=FUZZ&utm=FUZZ",
                "https://example.com/search?q=FUZZ",
            ]
        );
        assert!(!contents.contains("123"), "Original values must not leak");
    }

    /// With `--on-exhausted skip`, a dead hostname is skipped and the batch
    /// continues.
    ///
    /// Sleeps through two real retry delays (about ten seconds).
    #[tokio::test]
    async fn test_run_skips_exhausted_hostnames_when_configured() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/cdx"),
                request::query(url_decoded(contains(("url", "down.example/*")))),
            ])
            .times(3)
            .respond_with(status_code(500)),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/cdx"),
                request::query(url_decoded(contains(("url", "up.example/*")))),
            ])
            .respond_with(status_code(200).body("http://up.example/login?next=home\n")),
        );

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = Config {
            domains: vec!["down.example".to_string(), "up.example".to_string()],
            output: temp_dir.path().join("results"),
            archive_url: format!("http://{}/cdx", server.addr()),
            on_exhausted: OnExhausted::Skip,
            ..Default::default()
        };

        let report = run(config)
            .await
            .expect("Run should continue past the dead hostname");

        assert_eq!(report.skipped_domains, 1);
        assert_eq!(report.domains.len(), 1);
        assert_eq!(report.domains[0].hostname, "up.example");
        assert_eq!(report.total_urls, 1);
        assert!(
            !temp_dir
                .path()
                .join("results")
                .join("down.example.txt")
                .exists(),
            "Skipped hostnames must not leave a results file"
        );
    }

    /// The default policy aborts the run on the first exhausted hostname.
    ///
    /// Sleeps through two real retry delays (about ten seconds).
    #[tokio::test]
    async fn test_run_aborts_on_exhaustion_by_default() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/cdx"))
                .times(3)
                .respond_with(status_code(500)),
        );

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = Config {
            domains: vec!["dead.example".to_string()],
            output: temp_dir.path().join("results"),
            archive_url: format!("http://{}/cdx", server.addr()),
            ..Default::default()
        };

        let err = run(config).await.expect_err("Default policy should abort");
        let chain = format!("{:#}", err);
        assert!(
            chain.contains("dead.example"),
            "Error should name the hostname: {}",
            chain
        );
        assert!(
            chain.contains("after 3 attempts"),
            "Error should report the attempt count: {}",
            chain
        );
    }

    /// User-Agent pools can be served over HTTP
    #[tokio::test]
    async fn test_user_agent_pool_loads_from_url() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/agents.txt"))
                .respond_with(status_code(200).body("agent-one/1.0\nagent-two/2.0\n")),
        );

        let url = format!("http://{}/agents.txt", server.addr());
        let pool = UserAgentPool::load(Some(&url)).await;
        assert_eq!(pool.len(), 2);
    }

    /// A pool source that answers with an error falls back to the built-ins
    #[tokio::test]
    async fn test_user_agent_pool_falls_back_on_http_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/missing.txt"))
                .respond_with(status_code(404)),
        );

        let url = format!("http://{}/missing.txt", server.addr());
        let pool = UserAgentPool::load(Some(&url)).await;
        assert_eq!(pool.len(), 15);
    }
}
