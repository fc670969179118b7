//! Interactive terminal front-end for the revision pipeline.
//!
//! Reads a draft from stdin, revises it (with optional collection
//! override), then optionally applies one incremental instruction.
//!
//! Required environment: `GEMINI_API_KEY`, `OPENAI_API_KEY`,
//! `ASTRA_DB_API_ENDPOINT`, `ASTRA_DB_APPLICATION_TOKEN`,
//! `ASTRA_DB_NAMESPACE`. A missing credential is reported as a
//! service-unavailable message, not a crash.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use revisor_model::{GeminiModel, OpenAiChatModel};
use revisor_pipeline::{Editor, Label, Revisor};
use revisor_rag::{AstraDbSearch, OpenAiEmbeddingProvider};

fn prompt_line(stdin: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let classifier_model = Arc::new(
        GeminiModel::from_env().context("serviço de classificação indisponível")?,
    );
    let generator = Arc::new(
        OpenAiChatModel::from_env().context("serviço de geração indisponível")?,
    );
    let embedder = Arc::new(
        OpenAiEmbeddingProvider::from_env().context("serviço de embedding indisponível")?,
    );
    let store =
        Arc::new(AstraDbSearch::from_env().context("banco vetorial indisponível")?);

    let revisor = Revisor::builder()
        .classifier_model(classifier_model)
        .generator(generator.clone())
        .embedder(embedder)
        .store(store)
        .build()?;
    let editor = Editor::new(generator);

    let mut stdin = io::stdin().lock();

    let draft = prompt_line(&mut stdin, "Insira o TEXTO BASE para revisão: ")?;
    if draft.is_empty() {
        println!("Entrada vazia. Encerrando.");
        return Ok(());
    }

    let override_input = prompt_line(
        &mut stdin,
        "Forçar coleção? (PRODUTO, CULTURA ou OUTROS; vazio = classificação automática): ",
    )?;
    let collection_override = if override_input.is_empty() {
        None
    } else {
        Some(override_input.parse::<Label>().context("coleção inválida")?)
    };

    let result = revisor.revise(&draft, collection_override).await?;

    println!("\n{}", "=".repeat(70));
    println!("TEXTO REVISADO\n");
    println!("{}", result.revised_text);
    if let Some(change_log) = &result.change_log {
        println!("\nAJUSTES TÉCNICOS E CORREÇÕES\n");
        println!("{change_log}");
    }
    println!("{}", "=".repeat(70));

    let instruction = prompt_line(
        &mut stdin,
        "\nInstrução incremental (vazio para finalizar): ",
    )?;
    if instruction.is_empty() {
        return Ok(());
    }

    let outcome = editor.apply(&result.revised_text, &instruction).await;
    println!("\n{}", "=".repeat(70));
    if outcome.fallback {
        println!("A instrução não pôde ser aplicada; mantendo a revisão anterior.\n");
    }
    println!("{}", outcome.text);
    println!("{}", "=".repeat(70));

    Ok(())
}
