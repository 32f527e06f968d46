//! Streaming `<meta>` extraction.
//!
//! The document is never buffered whole: chunks go straight into a
//! `lol_html` rewriter whose only handler forwards `<meta>` elements to a
//! [`MetaReader`]. The rewriter is not `Send`, so the async entry point runs
//! it on a blocking worker and feeds it over a bounded channel.

mod entities;
mod reader;

pub use entities::decode_html_entities;
pub use reader::MetaReader;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use lol_html::{element, errors::RewritingError, HtmlRewriter, Settings};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::models::Metadata;

/// Chunks buffered between the body stream and the parser worker.
const CHUNK_BUFFER: usize = 16;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Rewrite(#[from] RewritingError),

    #[error(transparent)]
    Body(#[from] reqwest::Error),

    #[error("metadata worker failed: {0}")]
    Worker(String),
}

/// Run every chunk through the rewriter and return the record collected once
/// the document ends.
pub fn extract_metadata<I>(chunks: I) -> Result<Option<Metadata>, ExtractError>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut reader = MetaReader::new();

    {
        let mut rewriter = HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![element!("meta", |el| {
                    reader.read_tag(
                        el.get_attribute("name").as_deref(),
                        el.get_attribute("property").as_deref(),
                        el.get_attribute("content").as_deref(),
                    );
                    Ok(())
                })],
                ..Settings::default()
            },
            |_: &[u8]| {},
        );

        for chunk in chunks {
            rewriter.write(chunk.as_ref())?;
        }
        rewriter.end()?;
    }

    Ok(reader.finish())
}

/// Drain an upstream body into [`extract_metadata`].
///
/// Resolves only after the whole body has been consumed. A body read error
/// wins over anything the parser saw; a parser error stops the upload early.
pub async fn extract_from_stream<S>(body: S) -> Result<Option<Metadata>, ExtractError>
where
    S: Stream<Item = reqwest::Result<Bytes>>,
{
    let (tx, mut rx) = mpsc::channel::<Bytes>(CHUNK_BUFFER);

    let worker = tokio::task::spawn_blocking(move || {
        extract_metadata(std::iter::from_fn(|| rx.blocking_recv()))
    });

    let mut body = std::pin::pin!(body);
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        if tx.send(chunk).await.is_err() {
            // Receiver dropped: the worker returned early with an error.
            break;
        }
    }
    drop(tx);

    worker
        .await
        .map_err(|e| ExtractError::Worker(e.to_string()))?
}
