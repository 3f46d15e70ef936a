//! Firestore REST client, created lazily once per page session.

use crate::constants::{META_FIREBASE_API_KEY, META_FIREBASE_PROJECT};
use crate::{dom, net};
use anyhow::anyhow;
use invite_core::firestore::{self, Document, FirestoreConfig};
use invite_core::Comment;
use std::cell::OnceCell;
use std::rc::Rc;

pub struct Store {
    config: FirestoreConfig,
}

thread_local! {
    static STORE: OnceCell<Option<Rc<Store>>> = const { OnceCell::new() };
}

fn config_from_page() -> Option<FirestoreConfig> {
    let document = dom::window_document()?;
    let project_id = dom::meta_content(&document, META_FIREBASE_PROJECT)?;
    let api_key = dom::meta_content(&document, META_FIREBASE_API_KEY)?;
    Some(FirestoreConfig {
        project_id,
        api_key,
    })
}

/// The session's store, or `None` when the page carries no Firebase config.
/// Repeated calls return the same client.
pub fn store() -> Option<Rc<Store>> {
    STORE.with(|cell| {
        cell.get_or_init(|| match config_from_page() {
            Some(config) => {
                log::info!("[store] project={}", config.project_id);
                Some(Rc::new(Store { config }))
            }
            None => {
                log::warn!("[store] firebase meta tags missing; writes disabled");
                None
            }
        })
        .clone()
    })
}

impl Store {
    /// Create `doc` under a fresh id; the server stamps its timestamp field.
    pub async fn add<D: Document>(&self, doc: &D) -> anyhow::Result<String> {
        let id = firestore::auto_id(&mut rand::thread_rng());
        let body = firestore::commit_body(&self.config, &id, doc);
        let reply = net::post_json(&self.config.commit_url(), &body).await?;
        if !reply.is_ok() {
            return Err(anyhow!(
                "commit to {} failed with {}",
                D::COLLECTION,
                reply.status
            ));
        }
        log::info!("[store] wrote {}/{}", D::COLLECTION, id);
        Ok(id)
    }

    /// Newest approved comments first.
    pub async fn recent_comments(&self, limit: u32) -> anyhow::Result<Vec<Comment>> {
        let body = firestore::recent_comments_query(limit);
        let reply = net::post_json(&self.config.run_query_url(), &body).await?;
        if !reply.is_ok() {
            return Err(anyhow!("comment query failed with {}", reply.status));
        }
        Ok(firestore::decode_comments(&reply.body)?)
    }
}
