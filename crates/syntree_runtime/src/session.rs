//! Session state for the REPL.
//!
//! A session holds the current tree, the parser for the active language,
//! and a bounded undo history. Each input line is either a sentence to parse
//! or a `:command`; [`Session::execute`] returns the text to show.

use std::collections::VecDeque;
use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use syntree_editor::{NodePatch, TreeEditor, move_node, remove_node, update_node};
use syntree_foundation::{
    LanguageCode, NodeId, PrettyConfig, Result, Tag, TreeNode, ValidationError, render_text,
    render_text_with_config,
};
use syntree_parser::{Classifier, ParserConfig, SuffixTagger, SyntaxParser};
use tracing::{debug, info};

use crate::serialize::{load_from_file, report_to_json, save_to_file, to_json};
use crate::tagger::{CachedTagger, TaggerConfig};

/// How trees are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented text.
    #[default]
    Text,
    /// Pretty JSON.
    Json,
}

/// Configuration for a [`Session`].
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Parser settings, including the starting language.
    pub parser: ParserConfig,
    /// How trees are printed.
    pub output: OutputFormat,
    /// Maximum number of undo steps kept.
    pub history_size: usize,
    /// Cache and pacing for the open-class tagger, when one is installed.
    pub tagger: Option<TaggerConfig>,
    /// Install the English suffix heuristic as the open-class tagger.
    pub suffix_fallback: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            output: OutputFormat::Text,
            history_size: 50,
            tagger: None,
            suffix_fallback: false,
        }
    }
}

impl SessionConfig {
    /// Builder method to set the parser configuration.
    #[must_use]
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Builder method to set the output format.
    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Builder method to set the undo depth.
    #[must_use]
    pub fn with_history_size(mut self, history_size: usize) -> Self {
        self.history_size = history_size;
        self
    }

    /// Builder method to enable the suffix heuristic, optionally cached.
    #[must_use]
    pub fn with_suffix_fallback(mut self, tagger: Option<TaggerConfig>) -> Self {
        self.suffix_fallback = true;
        self.tagger = tagger;
        self
    }

    fn classifier(&self) -> Classifier {
        let classifier = Classifier::standard();
        if !self.suffix_fallback {
            return classifier;
        }
        match &self.tagger {
            Some(config) => classifier.with_tagger(CachedTagger::new(SuffixTagger, config.clone())),
            None => classifier.with_tagger(SuffixTagger),
        }
    }
}

/// What the caller should do after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Show this text; may be empty.
    Output(String),
    /// End the session.
    Quit,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self::Output(text.into())
    }
}

const HELP: &str = "\
Enter a sentence to parse it, or a command:
  :lang [code]                 show or switch the language (en, es, ru, kk)
  :show                        print the current tree
  :json                        print the current tree as JSON
  :validate                    validate the current tree
  :add <parent> <label> <TAG>  append a node under <parent>
  :rm <id>                     remove a node and its subtree
  :mv <id> <parent>            move a node under <parent>
  :label <id> <text>           relabel a node
  :tag <id> <TAG>              retag a node
  :undo                        revert the last change
  :save <path>                 save the tree (.json, .txt, or MessagePack)
  :load <path>                 load a tree (.json or MessagePack)
  :help                        show this help
  :quit                        leave";

/// Interactive session state.
#[derive(Debug)]
pub struct Session {
    output: OutputFormat,
    history_size: usize,
    parser: SyntaxParser,
    editor: TreeEditor,
    tree: Option<TreeNode>,
    history: VecDeque<Option<TreeNode>>,
}

impl Session {
    /// Creates a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session from a configuration.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        let classifier = config.classifier();
        let editor = TreeEditor::seeded(config.parser.seed.wrapping_add(1));
        Self {
            output: config.output,
            history_size: config.history_size,
            parser: SyntaxParser::new(config.parser).with_classifier(classifier),
            editor,
            tree: None,
            history: VecDeque::new(),
        }
    }

    /// The current tree, if any.
    #[must_use]
    pub fn tree(&self) -> Option<&TreeNode> {
        self.tree.as_ref()
    }

    /// The active language.
    #[must_use]
    pub fn language(&self) -> LanguageCode {
        self.parser.language()
    }

    /// The parser in use.
    #[must_use]
    pub fn parser(&self) -> &SyntaxParser {
        &self.parser
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Replaces the current tree, recording the old one for undo.
    pub fn set_tree(&mut self, tree: TreeNode) {
        let previous = self.tree.replace(tree);
        self.history.push_back(previous);
        while self.history.len() > self.history_size {
            self.history.pop_front();
        }
    }

    /// Reverts the last change. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.tree = previous;
                true
            }
            None => false,
        }
    }

    /// Executes one input line.
    ///
    /// `:show` prints node ids next to each node so they can be used in edits.
    ///
    /// # Errors
    ///
    /// Returns parse, edit, and file errors; usage mistakes are replies.
    pub fn execute(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::text(""));
        }
        let Some(command) = line.strip_prefix(':') else {
            return self.parse_sentence(line);
        };

        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, rest)| (name, rest.trim()));
        let args: Vec<&str> = rest.split_whitespace().collect();
        debug!(command = name, args = args.len(), "executing command");

        match (name, args.as_slice()) {
            ("q" | "quit" | "exit", _) => Ok(Reply::Quit),
            ("h" | "help", _) => Ok(Reply::text(HELP)),
            ("lang", []) => Ok(Reply::text(format!(
                "language: {} ({})",
                self.language(),
                self.language().name()
            ))),
            ("lang", [code]) => {
                let language = LanguageCode::from_str(code)?;
                self.parser.set_language(language);
                info!(%language, "switched language");
                Ok(Reply::text(format!("language: {language}")))
            }
            ("show", []) => self.with_tree(|session, tree| session.render(tree)),
            ("json", []) => self.with_tree(|_, tree| to_json(tree).map(Reply::Output)),
            ("validate", []) => self.with_tree(|session, tree| {
                let findings = session.parser.validate(tree)?;
                Ok(Reply::Output(render_findings(&findings)))
            }),
            ("add", [parent, label, tag]) => self.edit(|session, tree| {
                let (updated, id) =
                    session
                        .editor
                        .add_node(tree, &NodeId::new(parent), *label, Tag::parse(tag))?;
                Ok((updated, format!("added {id}")))
            }),
            ("rm", [id]) => self.edit(|_, tree| {
                Ok((remove_node(tree, &NodeId::new(id))?, format!("removed {id}")))
            }),
            ("mv", [id, parent]) => self.edit(|_, tree| {
                let updated = move_node(tree, &NodeId::new(id), &NodeId::new(parent))?;
                Ok((updated, format!("moved {id} under {parent}")))
            }),
            ("label", [id, ..]) => {
                let label = rest[id.len()..].trim().to_string();
                self.edit(|_, tree| {
                    let patch = NodePatch::new().label(label.clone());
                    let updated = update_node(tree, &NodeId::new(id), &patch)?;
                    Ok((updated, format!("relabelled {id}")))
                })
            }
            ("tag", [id, tag]) => self.edit(|_, tree| {
                let patch = NodePatch::new().tag(Tag::parse(tag));
                Ok((update_node(tree, &NodeId::new(id), &patch)?, format!("retagged {id}")))
            }),
            ("undo", []) => Ok(Reply::text(if self.undo() {
                "undone"
            } else {
                "nothing to undo"
            })),
            ("save", [path]) => self.with_tree(|_, tree| {
                save_to_file(tree, path)?;
                Ok(Reply::Output(format!("saved to {path}")))
            }),
            ("load", [path]) => {
                let tree = load_from_file(Path::new(path))?;
                let count = tree.node_count();
                self.set_tree(tree);
                Ok(Reply::Output(format!("loaded {count} nodes from {path}")))
            }
            (
                "lang" | "show" | "json" | "validate" | "add" | "rm" | "mv" | "label" | "tag"
                | "undo" | "save" | "load",
                _,
            ) => Ok(Reply::Output(format!("usage: {}", usage(name)))),
            _ => Ok(Reply::Output(format!(
                "unknown command :{name}; try :help"
            ))),
        }
    }

    fn parse_sentence(&mut self, sentence: &str) -> Result<Reply> {
        let analysis = self.parser.analyze(sentence)?;
        let reply = match self.output {
            OutputFormat::Text => {
                let mut text = render_text(&analysis.tree);
                text.push_str(&render_findings(&analysis.findings));
                text
            }
            OutputFormat::Json => report_to_json(&analysis.tree, &analysis.findings)?,
        };
        self.set_tree(analysis.tree);
        Ok(Reply::Output(reply))
    }

    fn render(&self, tree: &TreeNode) -> Result<Reply> {
        match self.output {
            OutputFormat::Text => {
                let config = PrettyConfig {
                    show_ids: true,
                    ..PrettyConfig::default()
                };
                Ok(Reply::Output(render_text_with_config(tree, &config)))
            }
            OutputFormat::Json => to_json(tree).map(Reply::Output),
        }
    }

    fn with_tree<F>(&mut self, f: F) -> Result<Reply>
    where
        F: FnOnce(&mut Self, &TreeNode) -> Result<Reply>,
    {
        match self.tree.clone() {
            Some(tree) => f(self, &tree),
            None => Ok(Reply::text("no tree yet; enter a sentence first")),
        }
    }

    fn edit<F>(&mut self, f: F) -> Result<Reply>
    where
        F: FnOnce(&mut Self, &TreeNode) -> Result<(TreeNode, String)>,
    {
        self.with_tree(|session, tree| {
            let (updated, message) = f(session, tree)?;
            session.set_tree(updated);
            Ok(Reply::Output(message))
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn usage(command: &str) -> &'static str {
    match command {
        "lang" => ":lang [code]",
        "add" => ":add <parent> <label> <TAG>",
        "rm" => ":rm <id>",
        "mv" => ":mv <id> <parent>",
        "label" => ":label <id> <text>",
        "tag" => ":tag <id> <TAG>",
        "save" => ":save <path>",
        "load" => ":load <path>",
        "show" => ":show",
        "json" => ":json",
        "validate" => ":validate",
        "undo" => ":undo",
        _ => ":help",
    }
}

/// Renders findings one per line, or a single line saying there are none.
#[must_use]
pub fn render_findings(findings: &[ValidationError]) -> String {
    if findings.is_empty() {
        return "no findings\n".to_string();
    }
    let mut text = String::new();
    for finding in findings {
        // Writing to a String cannot fail.
        let _ = write!(text, "{finding}");
        if let Some(id) = &finding.details.node_id {
            let _ = write!(text, "  #{id}");
        }
        if let Some(position) = finding.details.position {
            let _ = write!(text, "  @{position}");
        }
        text.push('\n');
    }
    text
}
