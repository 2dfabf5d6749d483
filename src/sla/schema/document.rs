//! The `DOCUMENT` element: document settings and every top-level list.

use crate::sla::attrs::{AttributeGroup, attribute_group, leaf_element, push_leaf};
use crate::sla::element::Element;

use super::page_object::PageObject;
use super::pages::{NotesStyles, Page, PageSets, Sections};
use super::settings::{CheckProfile, Color, Layer, Pdf, Printer};
use super::styles::{CellStyle, CharacterStyle, ParagraphStyle, TableStyle};

attribute_group! {
    /// Attributes of the `DOCUMENT` element.
    pub struct DocumentAttributes {
        page_count => "ANZPAGES",
        page_width => "PAGEWIDTH",
        page_height => "PAGEHEIGHT",
        border_left => "BORDERLEFT",
        border_right => "BORDERRIGHT",
        border_top => "BORDERTOP",
        border_bottom => "BORDERBOTTOM",
        preset => "PRESET",
        bleed_top => "BleedTop",
        bleed_left => "BleedLeft",
        bleed_right => "BleedRight",
        bleed_bottom => "BleedBottom",
        orientation => "ORIENTATION",
        page_size => "PAGESIZE",
        first_page_number => "FIRSTNUM",
        book => "BOOK",
        auto_columns => "AUTOSPALTEN",
        auto_column_gap => "ABSTSPALTEN",
        units => "UNITS",
        default_font => "DFONT",
        default_font_size => "DSIZE",
        default_columns => "DCOL",
        default_column_gap => "DGAP",
        tab_fill => "TabFill",
        tab_width => "TabWidth",
        author => "AUTHOR",
        comments => "COMMENTS",
        keywords => "KEYWORDS",
        publisher => "PUBLISHER",
        date => "DOCDATE",
        doc_type => "DOCTYPE",
        format => "DOCFORMAT",
        identifier => "DOCIDENT",
        source => "DOCSOURCE",
        language_info => "DOCLANGINFO",
        relation => "DOCRELATION",
        coverage => "DOCCOVER",
        rights => "DOCRIGHTS",
        contributors => "DOCCONTRIB",
        title => "TITLE",
        subject => "SUBJECT",
        superscript_offset => "VHOCH",
        superscript_scale => "VHOCHSC",
        subscript_offset => "VTIEF",
        subscript_scale => "VTIEFSC",
        small_caps_scale => "VKAPIT",
        baseline_grid => "BASEGRID",
        baseline_grid_offset => "BASEO",
        auto_line_spacing => "AUTOL",
        underline_position => "UnderlinePos",
        underline_width => "UnderlineWidth",
        strike_through_position => "StrikeThruPos",
        strike_through_width => "StrikeThruWidth",
        group_counter => "GROUPC",
        color_management => "HCMS",
        cms_soft_proof => "DPSo",
        cms_soft_proof_full => "DPSFo",
        cms_use => "DPuse",
        cms_gamut_check => "DPgam",
        cms_black_point => "DPbla",
        cms_printer_profile => "DPPr",
        cms_rgb_profile => "DPIn",
        cms_cmyk_profile => "DPInCMYK",
        cms_rgb_image_profile => "DPIn2",
        cms_cmyk_image_profile => "DPIn3",
        cms_solid_intent => "DISc",
        cms_image_intent => "DIIm",
        active_layer => "ALAYER",
        language => "LANGUAGE",
        hyphen_min_word_length => "MINWORDLEN",
        hyphen_count => "HYCOUNT",
        hyphen_automatic => "AUTOMATIC",
        hyphen_auto_check => "AUTOCHECK",
        guides_locked => "GUIDELOCK",
        snap_to_guides => "SnapToGuides",
        snap_to_grid => "SnapToGrid",
        snap_to_element => "SnapToElement",
        minor_grid => "MINGRID",
        major_grid => "MAJGRID",
        show_grid => "SHOWGRID",
        show_guides => "SHOWGUIDES",
        show_column_borders => "showcolborders",
        preview_mode => "previewMode",
        show_frames => "SHOWFRAME",
        show_controls => "SHOWControl",
        show_layer_markers => "SHOWLAYERM",
        show_margins => "SHOWMARGIN",
        show_baseline => "SHOWBASE",
        show_pictures => "SHOWPICT",
        show_links => "SHOWLINK",
        ruler_mode => "rulerMode",
        show_rulers => "showrulers",
        show_bleed => "showBleed",
        ruler_x_offset => "rulerXoffset",
        ruler_y_offset => "rulerYoffset",
        guide_radius => "GuideRad",
        grab_radius => "GRAB",
        polygon_corners => "POLYC",
        polygon_factor => "POLYF",
        polygon_rotation => "POLYR",
        polygon_inner_rotation => "POLYIR",
        polygon_curvature => "POLYCUR",
        polygon_outer_curvature => "POLYOCUR",
        polygon_use_factor => "POLYS",
        arc_start_angle => "arcStartAngle",
        arc_sweep_angle => "arcSweepAngle",
        spiral_start_angle => "spiralStartAngle",
        spiral_end_angle => "spiralEndAngle",
        spiral_factor => "spiralFactor",
        auto_save => "AutoSave",
        auto_save_time => "AutoSaveTime",
        scratch_bottom => "ScratchBottom",
        scratch_left => "ScratchLeft",
        scratch_right => "ScratchRight",
        scratch_top => "ScratchTop",
        gap_horizontal => "GapHorizontal",
        gap_vertical => "GapVertical",
        start_arrow => "StartArrow",
        end_arrow => "EndArrow",
        shape_line_color => "PEN",
        shape_fill_color => "BRUSH",
        line_color => "PENLINE",
        text_color => "PENTEXT",
        text_stroke_color => "StrokeText",
        text_background => "TextBackGround",
        text_line_color => "TextLineColor",
        text_background_shade => "TextBackGroundShade",
        text_line_shade => "TextLineShade",
        text_pen_shade => "TextPenShade",
        text_stroke_shade => "TextStrokeShade",
        shape_line_style => "STIL",
        line_style => "STILLINE",
        shape_line_width => "WIDTH",
        line_width => "WIDTHLINE",
        shape_line_shade => "PENSHADE",
        line_shade => "LINESHADE",
        shape_fill_shade => "BRUSHSHADE",
        image_fill_color => "CPICT",
        image_fill_shade => "PICTSHADE",
        image_stroke_color => "CSPICT",
        image_stroke_shade => "PICTSSHADE",
        image_scale_x => "PICTSCX",
        image_scale_y => "PICTSCY",
        image_scale_to_frame => "PSCALE",
        image_keep_aspect => "PASPECT",
        image_embedded_path => "EmbeddedPath",
        image_half_resolution => "HalfRes",
        display_x => "dispX",
        display_y => "dispY",
        constrain_angle => "constrain",
        minor_grid_color => "MINORC",
        major_grid_color => "MAJORC",
        guide_color => "GuideC",
        baseline_color => "BaseC",
        render_stack => "renderStack",
        grid_type => "GridType",
        page_color => "PAGEC",
        margin_color => "MARGC",
        margin_follows_printable => "RANDF",
        current_check_profile => "currentProfile",
        calligraphic_pen_fill_color => "calligraphicPenFillColor",
        calligraphic_pen_line_color => "calligraphicPenLineColor",
        calligraphic_pen_fill_color_shade => "calligraphicPenFillColorShade",
        calligraphic_pen_line_color_shade => "calligraphicPenLineColorShade",
        calligraphic_pen_line_width => "calligraphicPenLineWidth",
        calligraphic_pen_angle => "calligraphicPenAngle",
        calligraphic_pen_width => "calligraphicPenWidth",
        calligraphic_pen_style => "calligraphicPenStyle",
    }
}

/// Everything inside `DOCUMENT`.
///
/// Children are written back in the order of the fields below. Children
/// this library does not model are kept in `unknown` and written last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentContent {
    pub attrs: DocumentAttributes,
    pub check_profiles: Vec<CheckProfile>,
    pub colors: Vec<Color>,
    pub hyphenation: Option<Element>,
    pub paragraph_styles: Vec<ParagraphStyle>,
    pub character_styles: Vec<CharacterStyle>,
    pub table_styles: Vec<TableStyle>,
    pub cell_styles: Vec<CellStyle>,
    pub layers: Vec<Layer>,
    pub printer: Option<Printer>,
    pub pdf: Option<Pdf>,
    pub item_attributes: Option<Element>,
    pub tables_of_contents: Option<Element>,
    pub notes_styles: Option<NotesStyles>,
    pub notes_frames: Option<Element>,
    pub page_sets: Option<PageSets>,
    pub sections: Option<Sections>,
    pub master_pages: Vec<Page>,
    pub pages: Vec<Page>,
    pub page_objects: Vec<PageObject>,
    pub unknown: Vec<Element>,
}

const HYPHEN: &str = "HYPHEN";
const DOC_ITEM_ATTRIBUTES: &str = "DocItemAttributes";
const TABLES_OF_CONTENTS: &str = "TablesOfContents";
const NOTES_FRAMES: &str = "NotesFrames";

/// Fill an empty singleton slot, or hand the element back.
fn fill<T>(
    slot: &mut Option<T>,
    element: Element,
    convert: impl FnOnce(Element) -> T,
) -> Option<Element> {
    if slot.is_some() {
        return Some(element);
    }
    *slot = Some(convert(element));
    None
}

/// Fill an empty singleton slot with an attribute-only group.
fn fill_leaf<A: AttributeGroup>(slot: &mut Option<A>, element: Element) -> Option<Element> {
    if slot.is_some() || !element.is_attribute_only() {
        return Some(element);
    }
    *slot = Some(A::from_attributes(element.into_attributes()));
    None
}

impl DocumentContent {
    pub const TAG: &'static str = "DOCUMENT";

    pub(crate) fn from_element(element: Element) -> Self {
        let (_, attributes, children) = element.into_parts();
        let mut content = DocumentContent {
            attrs: DocumentAttributes::from_attributes(attributes),
            ..Default::default()
        };
        for child in children {
            let unknown = &mut content.unknown;
            let rest = match child.name() {
                CheckProfile::TAG => {
                    push_leaf(child, &mut content.check_profiles, unknown);
                    None
                },
                Color::TAG => {
                    push_leaf(child, &mut content.colors, unknown);
                    None
                },
                ParagraphStyle::TAG => {
                    push_leaf(child, &mut content.paragraph_styles, unknown);
                    None
                },
                CharacterStyle::TAG => {
                    push_leaf(child, &mut content.character_styles, unknown);
                    None
                },
                Layer::TAG => {
                    push_leaf(child, &mut content.layers, unknown);
                    None
                },
                Page::MASTER_TAG => {
                    push_leaf(child, &mut content.master_pages, unknown);
                    None
                },
                Page::TAG => {
                    push_leaf(child, &mut content.pages, unknown);
                    None
                },
                TableStyle::TAG => {
                    content.table_styles.push(TableStyle::from_element(child));
                    None
                },
                CellStyle::TAG => {
                    content.cell_styles.push(CellStyle::from_element(child));
                    None
                },
                PageObject::TAG => {
                    content.page_objects.push(PageObject::from_element(child));
                    None
                },
                Printer::TAG => fill_leaf(&mut content.printer, child),
                Pdf::TAG => fill(&mut content.pdf, child, Pdf::from_element),
                NotesStyles::TAG => fill(&mut content.notes_styles, child, NotesStyles::from_element),
                PageSets::TAG => fill(&mut content.page_sets, child, PageSets::from_element),
                Sections::TAG => fill(&mut content.sections, child, Sections::from_element),
                HYPHEN => fill(&mut content.hyphenation, child, |e| e),
                DOC_ITEM_ATTRIBUTES => fill(&mut content.item_attributes, child, |e| e),
                TABLES_OF_CONTENTS => fill(&mut content.tables_of_contents, child, |e| e),
                NOTES_FRAMES => fill(&mut content.notes_frames, child, |e| e),
                _ => Some(child),
            };
            if let Some(child) = rest {
                content.unknown.push(child);
            }
        }
        content
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_attributes(Self::TAG, self.attrs.to_attributes());
        let children = element.children_mut();
        children.extend(self.check_profiles.iter().map(|p| leaf_element(CheckProfile::TAG, p)));
        children.extend(self.colors.iter().map(|c| leaf_element(Color::TAG, c)));
        children.extend(self.hyphenation.iter().cloned());
        children.extend(self.paragraph_styles.iter().map(|s| leaf_element(ParagraphStyle::TAG, s)));
        children.extend(self.character_styles.iter().map(|s| leaf_element(CharacterStyle::TAG, s)));
        children.extend(self.table_styles.iter().map(TableStyle::to_element));
        children.extend(self.cell_styles.iter().map(CellStyle::to_element));
        children.extend(self.layers.iter().map(|l| leaf_element(Layer::TAG, l)));
        children.extend(self.printer.iter().map(|p| leaf_element(Printer::TAG, p)));
        children.extend(self.pdf.iter().map(Pdf::to_element));
        children.extend(self.item_attributes.iter().cloned());
        children.extend(self.tables_of_contents.iter().cloned());
        children.extend(self.notes_styles.iter().map(NotesStyles::to_element));
        children.extend(self.notes_frames.iter().cloned());
        children.extend(self.page_sets.iter().map(PageSets::to_element));
        children.extend(self.sections.iter().map(Sections::to_element));
        children.extend(self.master_pages.iter().map(|p| leaf_element(Page::MASTER_TAG, p)));
        children.extend(self.pages.iter().map(|p| leaf_element(Page::TAG, p)));
        children.extend(self.page_objects.iter().map(PageObject::to_element));
        children.extend(self.unknown.iter().cloned());
        element
    }
}
