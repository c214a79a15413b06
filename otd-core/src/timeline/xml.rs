use super::model::{
    Categories, Category, DisplayedPeriod, Era, Eras, Event, Events, HiddenCategories, Timeline,
    View,
};
use crate::error::{Result, TimelineError};
use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event as XmlEvent},
};
use std::{fs, io, path::Path};
use thiserror::Error;
use tracing::debug;

const ROOT: &str = "timeline";

/// Why a document is not a timeline.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("malformed xml")]
    Syntax(#[from] quick_xml::Error),
    #[error("root element is <{0}>, expected <timeline>")]
    UnexpectedRoot(String),
    #[error("document ends inside <{0}>")]
    Unclosed(String),
    #[error("document has no root element")]
    NoRoot,
}

impl Timeline {
    /// Reads and parses the timeline file at `path`.
    ///
    /// A file that parses but has no events yields an empty timeline; an
    /// unreadable or malformed file is an error, so callers can tell the two
    /// apart.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TimelineError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let timeline = Self::from_xml(&content).map_err(|source| TimelineError::Xml {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            events = timeline.events.events.len(),
            eras = timeline.eras.eras.len(),
            categories = timeline.categories.categories.len(),
            "loaded timeline"
        );
        Ok(timeline)
    }

    /// Parses a timeline document. Text is kept exactly as written,
    /// surrounding whitespace included.
    pub fn from_xml(content: &str) -> std::result::Result<Self, XmlError> {
        let root = parse_tree(content)?;
        if root.name != ROOT {
            return Err(XmlError::UnexpectedRoot(root.name));
        }
        Ok(timeline_from(&root))
    }

    /// Serializes the whole document, indented by two spaces and preceded by
    /// an XML declaration.
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        write_timeline(&mut writer, self).map_err(TimelineError::XmlWrite)?;
        let mut xml = String::from_utf8_lossy(&writer.into_inner()).into_owned();
        xml.push('\n');
        Ok(xml)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let xml = self.to_xml()?;
        fs::write(path, xml).map_err(|source| TimelineError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), events = self.events.events.len(), "wrote timeline");
        Ok(())
    }
}

/// An element with its own character data and child elements.
#[derive(Debug, Default)]
struct Node {
    name: String,
    text: String,
    children: Vec<Node>,
}

impl Node {
    fn named(start: &BytesStart) -> Self {
        Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..Default::default()
        }
    }

    fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> {
        self.children.iter().filter(move |c| c.name == name)
    }

    fn first<'a>(&'a self, name: &'a str) -> Option<&'a Node> {
        self.all(name).next()
    }

    /// Text of the first `name` child, empty if there is none.
    fn text(&self, name: &str) -> String {
        self.first(name)
            .map(|n| n.text.clone())
            .unwrap_or_default()
    }
}

fn parse_tree(content: &str) -> std::result::Result<Node, XmlError> {
    let mut reader = Reader::from_str(content);
    let mut buf = Vec::new();
    let mut open: Vec<Node> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            XmlEvent::Start(e) => open.push(Node::named(&e)),
            XmlEvent::Empty(e) => attach(&mut open, &mut root, Node::named(&e)),
            XmlEvent::End(_) => {
                if let Some(node) = open.pop() {
                    attach(&mut open, &mut root, node);
                }
            }
            XmlEvent::Text(t) => {
                if let Some(node) = open.last_mut() {
                    node.text.push_str(&t.unescape()?);
                }
            }
            XmlEvent::CData(c) => {
                if let Some(node) = open.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            XmlEvent::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(node) = open.pop() {
        return Err(XmlError::Unclosed(node.name));
    }
    root.ok_or(XmlError::NoRoot)
}

fn attach(open: &mut [Node], root: &mut Option<Node>, node: Node) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

// Containers may repeat; their items are collected in document order.
fn timeline_from(root: &Node) -> Timeline {
    Timeline {
        version: root.text("version"),
        timetype: root.text("timetype"),
        eras: Eras {
            eras: root
                .all("eras")
                .flat_map(|n| n.all("era"))
                .map(era_from)
                .collect(),
        },
        categories: Categories {
            categories: root
                .all("categories")
                .flat_map(|n| n.all("category"))
                .map(category_from)
                .collect(),
        },
        events: Events {
            events: root
                .all("events")
                .flat_map(|n| n.all("event"))
                .map(event_from)
                .collect(),
        },
        view: root.first("view").map(view_from).unwrap_or_default(),
    }
}

fn era_from(node: &Node) -> Era {
    Era {
        name: node.text("name"),
        start: node.text("start"),
        end: node.text("end"),
        color: node.text("color"),
        ends_today: node.text("ends_today"),
    }
}

fn category_from(node: &Node) -> Category {
    Category {
        name: node.text("name"),
        color: node.text("color"),
        progress_color: node.text("progress_color"),
        done_color: node.text("done_color"),
        font_color: node.text("font_color"),
    }
}

fn event_from(node: &Node) -> Event {
    Event {
        start: node.text("start"),
        end: node.text("end"),
        text: node.text("text"),
        progress: node.text("progress"),
        fuzzy: node.text("fuzzy"),
        locked: node.text("locked"),
        ends_today: node.text("ends_today"),
        category: node.text("category"),
        description: node.text("description"),
        default_color: node.text("default_color"),
        milestone: node.text("milestone"),
    }
}

fn view_from(node: &Node) -> View {
    View {
        displayed_period: node
            .first("displayed_period")
            .map(|n| DisplayedPeriod {
                start: n.text("start"),
                end: n.text("end"),
            })
            .unwrap_or_default(),
        hidden_categories: HiddenCategories {
            names: node
                .all("hidden_categories")
                .flat_map(|n| n.all("name"))
                .map(|n| n.text.clone())
                .collect(),
        },
    }
}

fn open<W: io::Write>(w: &mut Writer<W>, name: &str) -> quick_xml::Result<()> {
    w.write_event(XmlEvent::Start(BytesStart::new(name)))
}

fn close<W: io::Write>(w: &mut Writer<W>, name: &str) -> quick_xml::Result<()> {
    w.write_event(XmlEvent::End(BytesEnd::new(name)))
}

/// `<name>value</name>`, or `<name/>` when empty. Text is written without
/// indentation so it reads back unchanged.
fn leaf<W: io::Write>(w: &mut Writer<W>, name: &str, value: &str) -> quick_xml::Result<()> {
    if value.is_empty() {
        return w.write_event(XmlEvent::Empty(BytesStart::new(name)));
    }
    open(w, name)?;
    w.write_event(XmlEvent::Text(BytesText::new(value)))?;
    close(w, name)
}

fn write_timeline<W: io::Write>(w: &mut Writer<W>, timeline: &Timeline) -> quick_xml::Result<()> {
    w.write_event(XmlEvent::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    open(w, ROOT)?;
    leaf(w, "version", &timeline.version)?;
    leaf(w, "timetype", &timeline.timetype)?;

    open(w, "eras")?;
    for era in &timeline.eras.eras {
        open(w, "era")?;
        leaf(w, "name", &era.name)?;
        leaf(w, "start", &era.start)?;
        leaf(w, "end", &era.end)?;
        leaf(w, "color", &era.color)?;
        leaf(w, "ends_today", &era.ends_today)?;
        close(w, "era")?;
    }
    close(w, "eras")?;

    open(w, "categories")?;
    for category in &timeline.categories.categories {
        open(w, "category")?;
        leaf(w, "name", &category.name)?;
        leaf(w, "color", &category.color)?;
        leaf(w, "progress_color", &category.progress_color)?;
        leaf(w, "done_color", &category.done_color)?;
        leaf(w, "font_color", &category.font_color)?;
        close(w, "category")?;
    }
    close(w, "categories")?;

    open(w, "events")?;
    for event in &timeline.events.events {
        write_event(w, event)?;
    }
    close(w, "events")?;

    let view = &timeline.view;
    open(w, "view")?;
    open(w, "displayed_period")?;
    leaf(w, "start", &view.displayed_period.start)?;
    leaf(w, "end", &view.displayed_period.end)?;
    close(w, "displayed_period")?;
    open(w, "hidden_categories")?;
    for name in &view.hidden_categories.names {
        leaf(w, "name", name)?;
    }
    close(w, "hidden_categories")?;
    close(w, "view")?;

    close(w, ROOT)
}

fn write_event<W: io::Write>(w: &mut Writer<W>, event: &Event) -> quick_xml::Result<()> {
    open(w, "event")?;
    leaf(w, "start", &event.start)?;
    leaf(w, "end", &event.end)?;
    leaf(w, "text", &event.text)?;
    leaf(w, "progress", &event.progress)?;
    leaf(w, "fuzzy", &event.fuzzy)?;
    leaf(w, "locked", &event.locked)?;
    leaf(w, "ends_today", &event.ends_today)?;
    if !event.category.is_empty() {
        leaf(w, "category", &event.category)?;
    }
    if !event.description.is_empty() {
        leaf(w, "description", &event.description)?;
    }
    leaf(w, "default_color", &event.default_color)?;
    leaf(w, "milestone", &event.milestone)?;
    close(w, "event")
}
