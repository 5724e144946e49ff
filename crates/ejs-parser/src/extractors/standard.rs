//! Standard Editor.js block extractors.

use ejs_core::{
    AlertData, Block, CodeData, DelimiterData, EmbedData, HeaderData, ImageData, LinkImage,
    LinkMeta, LinkToolData, ListData, ListStyle, ParagraphData, QuoteData, RawData, TableData,
    VideoData, WarningData,
};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

use super::{BlockType, Extractor};
use crate::render::{element_children, first_descendant, inner_content, text_content};
use crate::styles::{
    has_flag, resolve_alert_type, resolve_alignment, resolve_embed_service, ORDERED, STRETCHED,
    WITH_BACKGROUND, WITH_BORDER, WITH_HEADINGS,
};
use crate::{ParserError, Result};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

static A: Lazy<Selector> = Lazy::new(|| selector("a"));
static BLOCKQUOTE: Lazy<Selector> = Lazy::new(|| selector("blockquote"));
static CODE: Lazy<Selector> = Lazy::new(|| selector("code"));
static FIGCAPTION: Lazy<Selector> = Lazy::new(|| selector("figcaption"));
static H4: Lazy<Selector> = Lazy::new(|| selector("h4"));
static IFRAME: Lazy<Selector> = Lazy::new(|| selector("iframe"));
static IMG: Lazy<Selector> = Lazy::new(|| selector("img"));
static P: Lazy<Selector> = Lazy::new(|| selector("p"));
static TBODY: Lazy<Selector> = Lazy::new(|| selector("tbody"));
static THEAD: Lazy<Selector> = Lazy::new(|| selector("thead"));
static TR: Lazy<Selector> = Lazy::new(|| selector("tr"));

static HEADING_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^h([1-6])$").expect("static regex must compile"));

/// Create all standard extractors
pub fn standard_extractors() -> Vec<Extractor> {
    vec![
        Extractor::new(BlockType::Header, header),
        Extractor::new(BlockType::Paragraph, paragraph),
        Extractor::new(BlockType::List, list),
        Extractor::new(BlockType::Raw, raw),
        Extractor::new(BlockType::LinkTool, link_tool),
        Extractor::new(BlockType::Delimiter, delimiter),
        Extractor::new(BlockType::Alert, alert),
        Extractor::new(BlockType::Table, table),
        Extractor::new(BlockType::Code, code),
        Extractor::new(BlockType::Quote, quote),
        Extractor::new(BlockType::Video, video),
        Extractor::new(BlockType::Embed, embed),
        Extractor::new(BlockType::Image, image),
        Extractor::new(BlockType::Warning, warning),
    ]
}

/// First descendant matching `selector`, or a malformed-block error naming `tag`
fn require<'a>(
    element: ElementRef<'a>,
    selector: &Selector,
    block_type: BlockType,
    tag: &str,
) -> Result<ElementRef<'a>> {
    first_descendant(element, selector)
        .ok_or_else(|| ParserError::malformed(block_type.name(), format!("<{}>", tag)))
}

/// Attribute value, empty when absent
fn attr(element: ElementRef, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}

fn header(element: ElementRef, styles: &[String], _: &str) -> Result<Block> {
    let level: u8 = HEADING_TAG
        .captures(element.value().name())
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| ParserError::malformed(BlockType::Header.name(), "<h1>-<h6> heading tag"))?;

    Ok(Block::Header(HeaderData {
        text: inner_content(element),
        level,
        alignment: resolve_alignment(styles),
    }))
}

fn paragraph(element: ElementRef, styles: &[String], _: &str) -> Result<Block> {
    Ok(Block::Paragraph(ParagraphData {
        text: inner_content(element),
        alignment: resolve_alignment(styles),
    }))
}

fn list(element: ElementRef, styles: &[String], _: &str) -> Result<Block> {
    let style = if has_flag(styles, ORDERED) {
        ListStyle::Ordered
    } else {
        ListStyle::Unordered
    };

    Ok(Block::List(ListData {
        style,
        items: element_children(element).map(text_content).collect(),
    }))
}

fn raw(element: ElementRef, _: &[String], _: &str) -> Result<Block> {
    Ok(Block::Raw(RawData {
        html: inner_content(element),
    }))
}

fn link_tool(element: ElementRef, _: &[String], prefix: &str) -> Result<Block> {
    let marked = |style: &str| -> Result<String> {
        let marker = format!("{}_{}", prefix, style).to_lowercase();
        element
            .select(&P)
            .find(|p| {
                p.value()
                    .attr("class")
                    .is_some_and(|class| class.to_lowercase().contains(&marker))
            })
            .map(text_content)
            .ok_or_else(|| {
                ParserError::malformed(BlockType::LinkTool.name(), format!("<p class=\"{}\">", marker))
            })
    };

    let title = marked("title")?;
    let description = marked("description")?;
    let site_name = marked("sitename")?;
    let anchor = require(element, &A, BlockType::LinkTool, "a")?;
    let img = require(element, &IMG, BlockType::LinkTool, "img")?;

    Ok(Block::LinkTool(LinkToolData {
        link: attr(anchor, "href"),
        meta: LinkMeta {
            site_name,
            image: LinkImage {
                url: attr(img, "src"),
            },
            title,
            description,
        },
    }))
}

fn delimiter(_: ElementRef, _: &[String], _: &str) -> Result<Block> {
    Ok(Block::Delimiter(DelimiterData::default()))
}

fn alert(element: ElementRef, styles: &[String], _: &str) -> Result<Block> {
    Ok(Block::Alert(AlertData {
        kind: resolve_alert_type(styles),
        align: resolve_alignment(styles),
        message: inner_content(element),
    }))
}

fn table(element: ElementRef, styles: &[String], _: &str) -> Result<Block> {
    let cells = |row: ElementRef| -> Vec<String> { element_children(row).map(text_content).collect() };

    let mut content = Vec::new();

    if let Some(thead) = first_descendant(element, &THEAD) {
        let row = first_descendant(thead, &TR)
            .ok_or_else(|| ParserError::malformed(BlockType::Table.name(), "<tr> in <thead>"))?;
        content.push(cells(row));
    }

    if let Some(tbody) = first_descendant(element, &TBODY) {
        content.extend(tbody.select(&TR).map(cells));
    }

    Ok(Block::Table(TableData {
        with_headings: has_flag(styles, WITH_HEADINGS),
        content,
    }))
}

fn code(element: ElementRef, _: &[String], _: &str) -> Result<Block> {
    let code = require(element, &CODE, BlockType::Code, "code")?;

    Ok(Block::Code(CodeData {
        code: text_content(code),
    }))
}

fn quote(element: ElementRef, styles: &[String], _: &str) -> Result<Block> {
    let text = require(element, &BLOCKQUOTE, BlockType::Quote, "blockquote")?;
    let caption = require(element, &FIGCAPTION, BlockType::Quote, "figcaption")?;

    Ok(Block::Quote(QuoteData {
        text: inner_content(text),
        caption: inner_content(caption),
        alignment: resolve_alignment(styles),
    }))
}

fn video(element: ElementRef, _: &[String], _: &str) -> Result<Block> {
    Ok(Block::Video(VideoData {
        url: inner_content(element),
    }))
}

fn embed(element: ElementRef, styles: &[String], _: &str) -> Result<Block> {
    let iframe = require(element, &IFRAME, BlockType::Embed, "iframe")?;
    let caption = require(element, &FIGCAPTION, BlockType::Embed, "figcaption")?;
    let source = attr(iframe, "src");

    Ok(Block::Embed(EmbedData {
        service: resolve_embed_service(styles),
        embed: source.clone(),
        source,
        width: attr(iframe, "width"),
        height: attr(iframe, "height"),
        caption: inner_content(caption),
    }))
}

fn image(element: ElementRef, styles: &[String], _: &str) -> Result<Block> {
    let img = require(element, &IMG, BlockType::Image, "img")?;
    let caption = require(element, &FIGCAPTION, BlockType::Image, "figcaption")?;

    Ok(Block::Image(ImageData {
        url: attr(img, "src"),
        caption: inner_content(caption),
        with_border: has_flag(styles, WITH_BORDER),
        with_background: has_flag(styles, WITH_BACKGROUND),
        stretched: has_flag(styles, STRETCHED),
    }))
}

fn warning(element: ElementRef, _: &[String], _: &str) -> Result<Block> {
    let title = require(element, &H4, BlockType::Warning, "h4")?;
    let message = require(element, &P, BlockType::Warning, "p")?;

    Ok(Block::Warning(WarningData {
        title: text_content(title),
        message: text_content(message),
    }))
}
