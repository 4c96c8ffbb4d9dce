/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use medial::api::{Client, PostFilter};

    // Disabled for ci/cd builds since they need a real access token in
    // MEDIAL_ACCESS_TOKEN (directly or via a .env file).

    #[ignore]
    #[tokio::test]
    async fn my_id_from_live_token() {
        dotenvy::dotenv().ok();
        let token = helpers::get_live_access_token().unwrap();
        let client = Client::new(&token);
        let my_id = client.my_id().unwrap();
        println!("Authenticated user id: {my_id}");
        assert!(!my_id.is_empty());
    }

    #[ignore]
    #[tokio::test]
    async fn list_pods() {
        dotenvy::dotenv().ok();
        let token = helpers::get_live_access_token().unwrap();
        let client = Client::new(&token);
        let pods = client.get_pods(0, 20).await.unwrap();
        for pod in &pods {
            println!("Pod {}: {:?}", pod.id, pod.name);
        }
    }

    #[ignore]
    #[tokio::test]
    async fn trending_feed() {
        dotenvy::dotenv().ok();
        let token = helpers::get_live_access_token().unwrap();
        let client = Client::new(&token);
        let feed = client.get_posts(0, 20, PostFilter::Trending).await.unwrap();
        println!("Feed envelope: {feed}");
    }
}
