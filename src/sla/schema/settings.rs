//! Preflight profiles, color swatches, layers and output settings.

use crate::sla::attrs::{AttributeGroup, attribute_group, leaf_element, push_leaf};
use crate::sla::element::Element;

attribute_group! {
    /// A named preflight check profile (`CheckProfile`).
    pub struct CheckProfile = "CheckProfile" {
        name => "Name",
        ignore_errors => "ignoreErrors",
        auto_check => "autoCheck",
        check_glyphs => "checkGlyphs",
        check_orphans => "checkOrphans",
        check_overflow => "checkOverflow",
        check_pictures => "checkPictures",
        check_part_filled_image_frames => "checkPartFilledImageFrames",
        check_resolution => "checkResolution",
        check_transparency => "checkTransparency",
        min_resolution => "minResolution",
        max_resolution => "maxResolution",
        check_annotations => "checkAnnotations",
        check_raster_pdf => "checkRasterPDF",
        check_for_gif => "checkForGIF",
        ignore_off_layers => "ignoreOffLayers",
        check_not_cmyk_or_spot => "checkNotCMYKOrSpot",
        check_device_colors_and_output_intent => "checkDeviceColorsAndOutputIntent",
        check_font_not_embedded => "checkFontNotEmbedded",
        check_font_is_open_type => "checkFontIsOpenType",
        check_applied_master_different_side => "checkAppliedMasterDifferentSide",
        check_empty_text_frames => "checkEmptyTextFrames",
    }
}

attribute_group! {
    /// A color swatch (`COLOR`). Names are unique within a document.
    pub struct Color = "COLOR" {
        name => "NAME",
        cmyk => "CMYK",
        rgb => "RGB",
        spot => "Spot",
        register => "Register",
    }
}

impl Color {
    /// A CMYK swatch, e.g. `Color::cmyk("Black", "#000000ff")`.
    pub fn cmyk(name: &str, value: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            cmyk: Some(value.to_string()),
            ..Default::default()
        }
    }
}

attribute_group! {
    /// A layer (`LAYERS`).
    pub struct Layer = "LAYERS" {
        number => "NUMMER",
        level => "LEVEL",
        name => "NAME",
        visible => "SICHTBAR",
        printable => "DRUCKEN",
        editable => "EDIT",
        selectable => "SELECT",
        flow => "FLOW",
        transparency => "TRANS",
        blend_mode => "BLEND",
        outline => "OUTL",
        marker_color => "LAYERC",
    }
}

attribute_group! {
    /// Print dialog settings (`Printer`).
    pub struct Printer = "Printer" {
        first_use => "firstUse",
        to_file => "toFile",
        use_alt_print_command => "useAltPrintCommand",
        output_separations => "outputSeparations",
        use_spot_colors => "useSpotColors",
        use_color => "useColor",
        mirror_h => "mirrorH",
        mirror_v => "mirrorV",
        use_icc => "useICC",
        do_gcr => "doGCR",
        do_clip => "doClip",
        set_dev_param => "setDevParam",
        use_doc_bleeds => "useDocBleeds",
        crop_marks => "cropMarks",
        bleed_marks => "bleedMarks",
        registration_marks => "registrationMarks",
        color_marks => "colorMarks",
        include_pdf_marks => "includePDFMarks",
        ps_level => "PSLevel",
        pd_language => "PDLanguage",
        mark_length => "markLength",
        mark_offset => "markOffset",
        bleed_top => "BleedTop",
        bleed_left => "BleedLeft",
        bleed_right => "BleedRight",
        bleed_bottom => "BleedBottom",
        printer => "printer",
        filename => "filename",
        separation_name => "separationName",
        printer_command => "printerCommand",
    }
}

attribute_group! {
    /// Halftone screen for one ink (`LPI`).
    pub struct Lpi = "LPI" {
        color => "Color",
        frequency => "Frequency",
        angle => "Angle",
        spot_function => "SpotFunction",
    }
}

attribute_group! {
    /// Attributes of the PDF export settings element.
    pub struct PdfAttributes {
        first_use => "firstUse",
        thumbnails => "Thumbnails",
        articles => "Articles",
        bookmarks => "Bookmarks",
        compress => "Compress",
        compression_method => "CMethod",
        quality => "Quality",
        embed_pdf => "EmbedPDF",
        mirror_h => "MirrorH",
        mirror_v => "MirrorV",
        clip => "Clip",
        range_selection => "rangeSel",
        range_text => "rangeTxt",
        rotate_degrees => "RotateDeg",
        present_mode => "PresentMode",
        recalc_pictures => "RecalcPic",
        font_embedding => "FontEmbedding",
        grayscale => "Grayscale",
        rgb_mode => "RGBMode",
        use_profiles => "UseProfiles",
        use_profiles2 => "UseProfiles2",
        binding => "Binding",
        picture_resolution => "PicRes",
        resolution => "Resolution",
        version => "Version",
        intent => "Intent",
        intent2 => "Intent2",
        solid_profile => "SolidP",
        image_profile => "ImageP",
        print_profile => "PrintP",
        info_string => "InfoString",
        bleed_top => "BTop",
        bleed_left => "BLeft",
        bleed_right => "BRight",
        bleed_bottom => "BBottom",
        use_doc_bleeds => "useDocBleeds",
        crop_marks => "cropMarks",
        bleed_marks => "bleedMarks",
        registration_marks => "registrationMarks",
        color_marks => "colorMarks",
        doc_info_marks => "docInfoMarks",
        mark_length => "markLength",
        mark_offset => "markOffset",
        image_compression => "ImagePr",
        owner_password => "PassOwner",
        user_password => "PassUser",
        permissions => "Permissions",
        encrypt => "Encrypt",
        use_layers => "UseLayers",
        use_lpi => "UseLpi",
        use_spot_colors => "UseSpotColors",
        do_multi_file => "doMultiFile",
        display_bookmarks => "displayBookmarks",
        display_fullscreen => "displayFullscreen",
        display_layers => "displayLayers",
        display_thumbs => "displayThumbs",
        hide_menu_bar => "hideMenuBar",
        hide_tool_bar => "hideToolBar",
        fit_window => "fitWindow",
        open_after_export => "openAfterExport",
        page_layout => "PageLayout",
        open_action => "openAction",
    }
}

/// PDF export settings (`PDF`) with per-ink screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pdf {
    pub attrs: PdfAttributes,
    pub lpi: Vec<Lpi>,
    /// Font lists, subsets, page effects and other children kept verbatim
    pub unknown: Vec<Element>,
}

impl Pdf {
    pub const TAG: &'static str = "PDF";

    pub(crate) fn from_element(element: Element) -> Self {
        let (_, attributes, children) = element.into_parts();
        let mut pdf = Pdf {
            attrs: PdfAttributes::from_attributes(attributes),
            ..Default::default()
        };
        for child in children {
            if child.name() == Lpi::TAG {
                push_leaf(child, &mut pdf.lpi, &mut pdf.unknown);
            } else {
                pdf.unknown.push(child);
            }
        }
        pdf
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_attributes(Self::TAG, self.attrs.to_attributes());
        for lpi in &self.lpi {
            element.add_child(leaf_element(Lpi::TAG, lpi));
        }
        element.children_mut().extend(self.unknown.iter().cloned());
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_children() {
        let xml = r#"<PDF Version="14" Resolution="300" PassOwner="">
            <LPI Color="Black" Frequency="133" Angle="45" SpotFunction="3"/>
            <Fonts Name="FreeSans Regular"/>
            <LPI Color="Cyan" Frequency="133" Angle="105" SpotFunction="3"/>
        </PDF>"#;
        let pdf = Pdf::from_element(Element::parse(xml.as_bytes()).unwrap());
        assert_eq!(pdf.attrs.version.as_deref(), Some("14"));
        assert_eq!(pdf.attrs.owner_password.as_deref(), Some(""));
        assert_eq!(pdf.attrs.user_password, None);
        assert_eq!(pdf.lpi.len(), 2);
        assert_eq!(pdf.lpi[1].color.as_deref(), Some("Cyan"));
        assert_eq!(pdf.unknown.len(), 1);
        assert_eq!(Pdf::from_element(pdf.to_element()), pdf);
    }

    #[test]
    fn test_color_constructor() {
        let color = Color::cmyk("Black", "#000000ff");
        assert_eq!(color.get("NAME"), Some("Black"));
        assert_eq!(color.get("CMYK"), Some("#000000ff"));
        assert_eq!(color.register, None);
    }
}
