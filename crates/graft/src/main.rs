use std::io::{BufReader, BufWriter, Write as _};

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use graft_errors::{Diagnostic, Renderer};
use graft_inputs::File;
use graft_parse::parse_file;
use graft_syntax::{SyntaxTree, binary};
use salsa::DatabaseImpl;

#[derive(Parser)]
enum Options {
    /// Parse a source file and dump its syntax tree.
    Parse {
        path: Utf8PathBuf,
        /// Replay a previously written tree cache instead of parsing.
        #[arg(long)]
        cache: Option<Utf8PathBuf>,
        /// Write the tree (even a partial one, after an error) as a cache.
        #[arg(long)]
        write_cache: Option<Utf8PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    match Options::parse() {
        Options::Parse { path, cache, write_cache } => {
            let db = DatabaseImpl::default();
            let file = File::from_path(&db, path);
            let text = file.text(&db);
            let path = file.path(&db).as_str();

            let tree: SyntaxTree = match cache {
                Some(cache) => {
                    let reader = std::fs::File::open(&cache)
                        .with_context(|| format!("failed to open cache `{cache}`"))?;
                    binary::load(BufReader::new(reader), text)
                        .with_context(|| format!("cache `{cache}` does not replay `{path}`"))?
                }
                None => {
                    let parse = parse_file(&db, file);
                    let renderer = Renderer::styled();
                    for diagnostic in parse_file::accumulated::<Diagnostic>(&db, file) {
                        let position = file.line_index(&db).line_col(diagnostic.range().start());
                        eprintln!(
                            "{path}:{}:{}: {}",
                            position.line + 1,
                            position.col + 1,
                            diagnostic.message()
                        );
                        eprintln!("{}", diagnostic.render(&renderer, path, text));
                    }
                    parse.tree.clone()
                }
            };

            // The dump is produced even after a parse error.
            print!("{}", tree.display(text));

            if let Some(out) = write_cache {
                let mut writer = BufWriter::new(
                    std::fs::File::create(&out)
                        .with_context(|| format!("failed to create `{out}`"))?,
                );
                binary::save(&tree, &mut writer)
                    .with_context(|| format!("failed to write cache `{out}`"))?;
                writer.flush().with_context(|| format!("failed to write cache `{out}`"))?;
            }

            Ok(())
        }
    }
}
