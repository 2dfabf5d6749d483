//! Page geometry, page sets and sections.

use crate::sla::attrs::{AttributeGroup, Attributes, attribute_group, leaf_element, push_leaf};
use crate::sla::element::Element;

use super::styles::NotesStyle;

attribute_group! {
    /// Geometry of a page or master page (`PAGE`, `MASTERPAGE`).
    pub struct Page {
        x => "PAGEXPOS",
        y => "PAGEYPOS",
        width => "PAGEWIDTH",
        height => "PAGEHEIGHT",
        border_left => "BORDERLEFT",
        border_right => "BORDERRIGHT",
        border_top => "BORDERTOP",
        border_bottom => "BORDERBOTTOM",
        number => "NUM",
        name => "NAM",
        master_name => "MNAM",
        size => "Size",
        orientation => "Orientation",
        left => "LEFT",
        preset => "PRESET",
        vertical_guides => "VerticalGuides",
        horizontal_guides => "HorizontalGuides",
        auto_gap_horizontal => "AGhorizontalAutoGap",
        auto_gap_vertical => "AGverticalAutoGap",
        auto_count_horizontal => "AGhorizontalAutoCount",
        auto_count_vertical => "AGverticalAutoCount",
        auto_refer_horizontal => "AGhorizontalAutoRefer",
        auto_refer_vertical => "AGverticalAutoRefer",
        auto_guide_selection => "AGSelection",
        effect_duration => "pageEffectDuration",
        view_duration => "pageViewDuration",
        effect_type => "effectType",
        effect_dm => "Dm",
        effect_m => "M",
        effect_di => "Di",
    }
}

impl Page {
    pub const MASTER_TAG: &'static str = "MASTERPAGE";
    pub const TAG: &'static str = "PAGE";
}

attribute_group! {
    /// Page name inside a page set.
    pub struct PageName = "PageNames" {
        name => "Name",
    }
}

attribute_group! {
    /// Attributes of a page set layout (`Set`).
    pub struct PageSetAttributes {
        name => "Name",
        first_page => "FirstPage",
        rows => "Rows",
        columns => "Columns",
    }
}

/// A page set layout such as "Single Page" or "Facing Pages".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSet {
    pub attrs: PageSetAttributes,
    pub page_names: Vec<PageName>,
    pub unknown: Vec<Element>,
}

impl PageSet {
    pub const TAG: &'static str = "Set";

    fn from_element(element: Element) -> Self {
        let (_, attributes, children) = element.into_parts();
        let mut set = PageSet {
            attrs: PageSetAttributes::from_attributes(attributes),
            ..Default::default()
        };
        collect_leaves(children, PageName::TAG, &mut set.page_names, &mut set.unknown);
        set
    }

    fn to_element(&self) -> Element {
        let mut element = Element::with_attributes(Self::TAG, self.attrs.to_attributes());
        for name in &self.page_names {
            element.add_child(leaf_element(PageName::TAG, name));
        }
        element.children_mut().extend(self.unknown.iter().cloned());
        element
    }
}

/// The `PageSets` container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSets {
    pub sets: Vec<PageSet>,
    pub extra: Attributes,
    pub unknown: Vec<Element>,
}

impl PageSets {
    pub const TAG: &'static str = "PageSets";

    pub(crate) fn from_element(element: Element) -> Self {
        let (_, extra, children) = element.into_parts();
        let mut sets = PageSets {
            extra,
            ..Default::default()
        };
        for child in children {
            if child.name() == PageSet::TAG {
                sets.sets.push(PageSet::from_element(child));
            } else {
                sets.unknown.push(child);
            }
        }
        sets
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_attributes(Self::TAG, self.extra.clone());
        for set in &self.sets {
            element.add_child(set.to_element());
        }
        element.children_mut().extend(self.unknown.iter().cloned());
        element
    }
}

attribute_group! {
    /// A page numbering section (`Section`).
    pub struct Section = "Section" {
        number => "Number",
        name => "Name",
        from => "From",
        to => "To",
        numbering_type => "Type",
        start => "Start",
        reversed => "Reversed",
        active => "Active",
        fill_char => "FillChar",
        field_width => "FieldWidth",
    }
}

/// The `Sections` container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub sections: Vec<Section>,
    pub extra: Attributes,
    pub unknown: Vec<Element>,
}

impl Sections {
    pub const TAG: &'static str = "Sections";

    pub(crate) fn from_element(element: Element) -> Self {
        let (_, extra, children) = element.into_parts();
        let mut sections = Sections {
            extra,
            ..Default::default()
        };
        collect_leaves(children, Section::TAG, &mut sections.sections, &mut sections.unknown);
        sections
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_attributes(Self::TAG, self.extra.clone());
        for section in &self.sections {
            element.add_child(leaf_element(Section::TAG, section));
        }
        element.children_mut().extend(self.unknown.iter().cloned());
        element
    }
}

/// The `NotesStyles` container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesStyles {
    pub styles: Vec<NotesStyle>,
    pub extra: Attributes,
    pub unknown: Vec<Element>,
}

impl NotesStyles {
    pub const TAG: &'static str = "NotesStyles";

    pub(crate) fn from_element(element: Element) -> Self {
        let (_, extra, children) = element.into_parts();
        let mut styles = NotesStyles {
            extra,
            ..Default::default()
        };
        collect_leaves(children, NotesStyle::TAG, &mut styles.styles, &mut styles.unknown);
        styles
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_attributes(Self::TAG, self.extra.clone());
        for style in &self.styles {
            element.add_child(leaf_element(NotesStyle::TAG, style));
        }
        element.children_mut().extend(self.unknown.iter().cloned());
        element
    }
}

/// Split `children` into leaves named `tag` and everything else.
fn collect_leaves<A: AttributeGroup>(
    children: Vec<Element>,
    tag: &str,
    leaves: &mut Vec<A>,
    unknown: &mut Vec<Element>,
) {
    for child in children {
        if child.name() == tag {
            push_leaf(child, leaves, unknown);
        } else {
            unknown.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sla::attrs::take_leaf;

    #[test]
    fn test_page_sets() {
        let xml = r#"<PageSets>
            <Set Name="Single Page" FirstPage="0" Rows="1" Columns="1"/>
            <Set Name="Facing Pages" FirstPage="1" Rows="1" Columns="2">
                <PageNames Name="Left Page"/>
                <PageNames Name="Right Page"/>
            </Set>
        </PageSets>"#;
        let sets = PageSets::from_element(Element::parse(xml.as_bytes()).unwrap());
        assert_eq!(sets.sets.len(), 2);
        assert!(sets.sets[0].page_names.is_empty());
        let facing = &sets.sets[1];
        assert_eq!(facing.attrs.columns.as_deref(), Some("2"));
        assert_eq!(facing.page_names[1].name.as_deref(), Some("Right Page"));
        assert_eq!(PageSets::from_element(sets.to_element()), sets);
    }

    #[test]
    fn test_sections_keep_unknown_children() {
        let xml = r#"<Sections>
            <Section Number="0" Name="0" From="0" To="0" Type="Type_1_2_3" Start="1" Reversed="0" Active="1" FillChar="0" FieldWidth="0"/>
            <Marker id="1"/>
        </Sections>"#;
        let sections = Sections::from_element(Element::parse(xml.as_bytes()).unwrap());
        assert_eq!(sections.sections.len(), 1);
        assert_eq!(sections.sections[0].numbering_type.as_deref(), Some("Type_1_2_3"));
        assert_eq!(sections.unknown.len(), 1);
        let written = sections.to_element();
        assert_eq!(written.children().len(), 2);
        assert_eq!(written.children()[1].name(), "Marker");
    }

    #[test]
    fn test_page_geometry_fields() {
        let element = Element::parse(
            br#"<PAGE PAGEXPOS="100" PAGEYPOS="20" PAGEWIDTH="595.28" NUM="0" MNAM="Normal"/>"#,
        )
        .unwrap();
        let page: Page = take_leaf(element).unwrap();
        assert_eq!(page.width.as_deref(), Some("595.28"));
        assert_eq!(page.master_name.as_deref(), Some("Normal"));
        assert_eq!(page.height, None);
    }
}
