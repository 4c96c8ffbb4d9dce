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
use medial::api::{Client, ImageSource, NewPost};

// Posts into the first pod the account belongs to, attaching one remote
// image. Expects MEDIAL_ACCESS_TOKEN in the environment (or a .env
// file) and an image URL plus the post text as arguments.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let image_url = args.next().expect("expected an image url argument");
    let content = args
        .next()
        .unwrap_or_else(|| "posted from the rust client".to_string());

    let token = std::env::var("MEDIAL_ACCESS_TOKEN")?;
    let client = Client::new(&token);
    println!("Posting as user {}", client.my_id()?);

    let pods = client.get_pods(0, 1).await?;
    let pod = pods.first().expect("account belongs to no pods");
    println!("Posting into pod {} ({:?})", pod.id, pod.name);

    let resp = client
        .send_post(NewPost {
            content,
            reference_id: pod.id.clone(),
            images: vec![ImageSource::url(image_url)],
            ..NewPost::default()
        })
        .await?;
    println!("Service response: {resp}");

    Ok(())
}
