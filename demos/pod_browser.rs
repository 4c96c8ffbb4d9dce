/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate medial;

use anyhow::Result;
use dotenvy::dotenv;
use medial::api::{Client, PostFilter};

// Walks the pod list page by page, then prints one page of the trending
// feed. Expects MEDIAL_ACCESS_TOKEN in the environment (or a .env file).
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let token = std::env::var("MEDIAL_ACCESS_TOKEN")?;
    let client = Client::new(&token);

    let page_size = 20;
    let mut offset = 0;
    loop {
        let pods = client.get_pods(offset, page_size).await?;
        if pods.is_empty() {
            break;
        }
        for pod in &pods {
            println!(
                "{}\t{}\t({} members)",
                pod.id,
                pod.name.as_deref().unwrap_or("<unnamed>"),
                pod.member_count.unwrap_or(0),
            );
        }
        if (pods.len() as u32) < page_size {
            break;
        }
        offset += page_size;
    }

    let feed = client.get_posts(0, 20, PostFilter::Trending).await?;
    println!("Trending feed envelope:\n{feed:#}");

    Ok(())
}
