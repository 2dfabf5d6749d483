#![cfg(test)]

use crate::sla::Document;

/// A one-page flyer as written by Scribus 1.5: a headline, a photo, a
/// bullet list, two linked text frames and a decorative polygon.
pub(super) const FLYER: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<SCRIBUSUTF8NEW Version="1.5.5">
    <DOCUMENT ANZPAGES="1" PAGEWIDTH="595.275590551181" PAGEHEIGHT="841.889763779528" BORDERLEFT="40" BORDERRIGHT="40" BORDERTOP="40" BORDERBOTTOM="40" PRESET="0" BleedTop="0" BleedLeft="0" BleedRight="0" BleedBottom="0" ORIENTATION="0" PAGESIZE="A4" FIRSTNUM="1" BOOK="0" AUTOSPALTEN="1" ABSTSPALTEN="11" UNITS="0" DFONT="FreeSans Regular" DSIZE="12" DCOL="1" DGAP="0" TabFill="" TabWidth="36" AUTHOR="Summer Team" COMMENTS="First line&#xA;Second line" KEYWORDS="" TITLE="Summer flyer" SUBJECT="" LANGUAGE="en_GB" ALAYER="0" currentProfile="PDF/X-4" calligraphicPenStyle="1" newTextFrameFlag="1">
        <CheckProfile Name="PDF/X-4" ignoreErrors="0" autoCheck="1" checkGlyphs="1" checkOrphans="1" checkOverflow="1" checkPictures="1" checkPartFilledImageFrames="0" checkResolution="1" checkTransparency="0" minResolution="144" maxResolution="2400" checkAnnotations="1" checkRasterPDF="1" checkForGIF="1" ignoreOffLayers="0" checkNotCMYKOrSpot="0" checkDeviceColorsAndOutputIntent="1" checkFontNotEmbedded="1" checkFontIsOpenType="0" checkAppliedMasterDifferentSide="1" checkEmptyTextFrames="1"/>
        <COLOR NAME="Black" CMYK="#000000ff" Register="0"/>
        <COLOR NAME="White" CMYK="#00000000" Register="0"/>
        <COLOR NAME="Registration" CMYK="#ffffffff" Register="1"/>
        <HYPHEN>
            <EXCEPTION WORD="scribus" HYPHENATED="scri-bus"/>
        </HYPHEN>
        <STYLE NAME="Default Paragraph Style" DefaultStyle="1" ALIGN="0" LINESPMode="0" LINESP="15" INDENT="0" RMARGIN="0" FIRST="0" VOR="0" NACH="0" ParagraphEffectOffset="0" DROP="0" DROPLIN="2" Bullet="0" Numeration="0" BCOLOR="None" BSHADE="100"/>
        <STYLE NAME="Headline" PARENT="Default Paragraph Style" ALIGN="1" LINESP="30"/>
        <CHARSTYLE CNAME="Default Character Style" DefaultStyle="1" FONT="FreeSans Regular" FONTSIZE="12" FEATURES="inherit" FCOLOR="Black" FSHADE="100" SCOLOR="Black" BGCOLOR="None" BGSHADE="100" SSHADE="100" TXTSHX="5" TXTSHY="-5" TXTOUT="1" TXTULP="-0.1" TXTULW="-0.1" TXTSTP="-0.1" TXTSTW="-0.1" SCALEH="100" SCALEV="100" BASEO="0" KERN="0" LANGUAGE="en_GB"/>
        <TableStyle NAME="Default Table Style" DefaultStyle="1" FillColor="None" FillShade="100">
            <TableBorderLeft>
                <TableBorderLine Width="1" PenStyle="1" Color="Black" Shade="100"/>
            </TableBorderLeft>
            <TableBorderRight>
                <TableBorderLine Width="1" PenStyle="1" Color="Black" Shade="100"/>
            </TableBorderRight>
            <TableBorderTop>
                <TableBorderLine Width="1" PenStyle="1" Color="Black" Shade="100"/>
            </TableBorderTop>
            <TableBorderBottom>
                <TableBorderLine Width="1" PenStyle="1" Color="Black" Shade="100"/>
            </TableBorderBottom>
        </TableStyle>
        <CellStyle NAME="Default Cell Style" DefaultStyle="1" FillColor="None" FillShade="100" LeftPadding="1" RightPadding="1" TopPadding="1" BottomPadding="1">
            <TableBorderLeft>
                <TableBorderLine Width="1" PenStyle="1" Color="Black" Shade="100"/>
            </TableBorderLeft>
        </CellStyle>
        <LAYERS NUMMER="0" LEVEL="0" NAME="Background" SICHTBAR="1" DRUCKEN="1" EDIT="1" SELECT="0" FLOW="1" TRANS="1" BLEND="0" OUTL="0" LAYERC="#000000"/>
        <Printer firstUse="1" toFile="0" useAltPrintCommand="0" outputSeparations="0" useSpotColors="1" useColor="1" mirrorH="0" mirrorV="0" useICC="0" doGCR="0" doClip="0" setDevParam="0" useDocBleeds="1" cropMarks="0" bleedMarks="0" registrationMarks="0" colorMarks="0" includePDFMarks="1" PSLevel="3" PDLanguage="1" markLength="20" markOffset="0" BleedTop="0" BleedLeft="0" BleedRight="0" BleedBottom="0" printer="" filename="" separationName="All" printerCommand=""/>
        <PDF firstUse="1" Thumbnails="0" Articles="0" Bookmarks="0" Compress="1" CMethod="0" Quality="0" EmbedPDF="0" MirrorH="0" MirrorV="0" Clip="0" rangeSel="0" rangeTxt="" RotateDeg="0" PresentMode="0" RecalcPic="0" FontEmbedding="0" Grayscale="0" RGBMode="1" UseProfiles="0" UseProfiles2="0" Binding="0" PicRes="300" Resolution="300" Version="14" Intent="1" Intent2="0" SolidP="" ImageP="" PrintP="" InfoString="" BTop="0" BLeft="0" BRight="0" BBottom="0" useDocBleeds="1" cropMarks="0" bleedMarks="0" registrationMarks="0" colorMarks="0" docInfoMarks="0" markLength="20" markOffset="0" ImagePr="0" PassOwner="" PassUser="" Permissions="-4" Encrypt="0" UseLayers="0" UseLpi="0" UseSpotColors="1" doMultiFile="0" displayBookmarks="0" displayFullscreen="0" displayLayers="0" displayThumbs="0" hideMenuBar="0" hideToolBar="0" fitWindow="0" openAfterExport="0" PageLayout="0" openAction="">
            <LPI Color="Black" Frequency="133" Angle="45" SpotFunction="3"/>
            <LPI Color="Cyan" Frequency="133" Angle="105" SpotFunction="3"/>
            <Fonts Name="FreeSans Regular"/>
        </PDF>
        <DocItemAttributes/>
        <TablesOfContents/>
        <NotesStyles>
            <notesStyle Name="Default" Start="1" Endnotes="0" Type="Type_1_2_3" Range="0" Prefix="" Suffix=")" AutoHeight="1" AutoWidth="1" AutoRemove="1" AutoWeld="1" SuperNote="1" SuperMaster="1" MarksStyle="" NotesStyle=""/>
        </NotesStyles>
        <NotesFrames/>
        <PageSets>
            <Set Name="Single Page" FirstPage="0" Rows="1" Columns="1"/>
            <Set Name="Facing Pages" FirstPage="1" Rows="1" Columns="2">
                <PageNames Name="Left Page"/>
                <PageNames Name="Right Page"/>
            </Set>
        </PageSets>
        <Sections>
            <Section Number="0" Name="0" From="0" To="0" Type="Type_1_2_3" Start="1" Reversed="0" Active="1" FillChar="0" FieldWidth="0"/>
        </Sections>
        <MASTERPAGE PAGEXPOS="100" PAGEYPOS="20" PAGEWIDTH="595.275590551181" PAGEHEIGHT="841.889763779528" BORDERLEFT="40" BORDERRIGHT="40" BORDERTOP="40" BORDERBOTTOM="40" NUM="0" NAM="Normal" MNAM="" Size="A4" Orientation="0" LEFT="0" PRESET="0" VerticalGuides="" HorizontalGuides="" AGhorizontalAutoGap="0" AGverticalAutoGap="0" AGhorizontalAutoCount="0" AGverticalAutoCount="0" AGhorizontalAutoRefer="0" AGverticalAutoRefer="0" AGSelection="0 0 0 0" pageEffectDuration="1" pageViewDuration="1" effectType="0" Dm="0" M="0" Di="0"/>
        <PAGE PAGEXPOS="100" PAGEYPOS="20" PAGEWIDTH="595.275590551181" PAGEHEIGHT="841.889763779528" BORDERLEFT="40" BORDERRIGHT="40" BORDERTOP="40" BORDERBOTTOM="40" NUM="0" NAM="" MNAM="Normal" Size="A4" Orientation="0" LEFT="0" PRESET="0" VerticalGuides="" HorizontalGuides="" AGhorizontalAutoGap="0" AGverticalAutoGap="0" AGhorizontalAutoCount="0" AGverticalAutoCount="0" AGhorizontalAutoRefer="0" AGverticalAutoRefer="0" AGSelection="0 0 0 0" pageEffectDuration="1" pageViewDuration="1" effectType="0" Dm="0" M="0" Di="0"/>
        <PAGEOBJECT XPOS="140" YPOS="60" OwnPage="0" ItemID="1001" PTYPE="4" WIDTH="400" HEIGHT="60" FRTYPE="0" CLIPEDIT="0" PWIDTH="1" PLINEART="1" LOCALSCX="1" LOCALSCY="1" LOCALX="0" LOCALY="0" LOCALROT="0" PICART="1" SCALETYPE="1" RATIO="1" COLUMNS="1" COLGAP="0" AUTOTEXT="0" EXTRA="0" TEXTRA="0" BEXTRA="0" REXTRA="0" VAlign="0" FLOP="0" PLTSHOW="0" BASEOF="0" textPathType="0" textPathFlipped="0" path="M0 0 L400 0 L400 60 L0 60 L0 0 Z" copath="M0 0 L400 0 L400 60 L0 60 L0 0 Z" gXpos="140" gYpos="60" gWidth="0" gHeight="0" LAYER="0" NEXTITEM="-1" BACKITEM="-1" PSTYLE="Headline">
            <StoryText>
                <DefaultStyle PARENT="Headline"/>
                <ITEXT CPARENT="Default Character Style" FONT="FreeSans Bold" CH="Hello"/>
                <trail PARENT="Headline"/>
            </StoryText>
        </PAGEOBJECT>
        <PAGEOBJECT XPOS="213.75" YPOS="108.75" OwnPage="0" ItemID="1002" PTYPE="2" WIDTH="191.25" HEIGHT="138" FRTYPE="0" CLIPEDIT="0" PWIDTH="1" PLINEART="1" LOCALSCX="0.75" LOCALSCY="0.75" LOCALX="0" LOCALY="0" LOCALROT="0" PICART="1" SCALETYPE="1" RATIO="1" Pagenumber="0" PFILE="images/beach.png" IRENDER="0" EMBEDDED="0" path="M0 0 L191.25 0 L191.25 138 L0 138 L0 0 Z" copath="M0 0 L191.25 0 L191.25 138 L0 138 L0 0 Z" gXpos="213.75" gYpos="108.75" gWidth="0" gHeight="0" LAYER="0" NEXTITEM="-1" BACKITEM="-1"/>
        <PAGEOBJECT XPOS="140" YPOS="300" OwnPage="0" ItemID="1003" PTYPE="4" WIDTH="300" HEIGHT="120" LAYER="0" NEXTITEM="-1" BACKITEM="-1">
            <StoryText>
                <DefaultStyle PARENT="Default Paragraph Style"/>
                <ITEXT CPARENT="Default Character Style" FONT="FreeSans Regular" CH="one"/>
                <para ParagraphEffectCharStyle="" ParagraphEffectOffset="14.1732283464567" ParagraphEffectIndent="1" DROP="0" Bullet="1" BulletStr="&#x25A0;" Numeration="0" NumerationFormat="0" NumerationName="&lt;local block&gt;" NumerationLevel="0" NumerationPrefix="" NumerationSuffix="." NumerationStart="1" NumerationHigher="1"/>
                <ITEXT CPARENT="Default Character Style" FONT="FreeSans Regular" CH="two"/>
                <para ParagraphEffectCharStyle="" ParagraphEffectOffset="14.1732283464567" ParagraphEffectIndent="1" DROP="0" Bullet="1" BulletStr="&#x25A0;" Numeration="0" NumerationFormat="0" NumerationName="&lt;local block&gt;" NumerationLevel="0" NumerationPrefix="" NumerationSuffix="." NumerationStart="1" NumerationHigher="1"/>
                <ITEXT CPARENT="Default Character Style" FONT="FreeSans Regular" CH="three"/>
                <para ParagraphEffectCharStyle="" ParagraphEffectOffset="14.1732283464567" ParagraphEffectIndent="1" DROP="0" Bullet="1" BulletStr="&#x25A0;" Numeration="0" NumerationFormat="0" NumerationName="&lt;local block&gt;" NumerationLevel="0" NumerationPrefix="" NumerationSuffix="." NumerationStart="1" NumerationHigher="1"/>
            </StoryText>
        </PAGEOBJECT>
        <PAGEOBJECT XPOS="40" YPOS="500" OwnPage="0" ItemID="1004" PTYPE="4" WIDTH="250" HEIGHT="200" LAYER="0" NEXTITEM="1005" BACKITEM="-1">
            <StoryText>
                <ITEXT CH="Sun, sand &amp; sea."/>
                <breakline/>
                <ITEXT CH="Literal &amp;#xA; stays as typed"/>
                <tab/>
                <ITEXT CH="end"/>
            </StoryText>
        </PAGEOBJECT>
        <PAGEOBJECT XPOS="305" YPOS="500" OwnPage="0" ItemID="1005" PTYPE="4" WIDTH="250" HEIGHT="200" LAYER="0" NEXTITEM="-1" BACKITEM="1004">
            <StoryText/>
        </PAGEOBJECT>
        <PAGEOBJECT XPOS="40" YPOS="720" OwnPage="0" ItemID="1006" PTYPE="6" WIDTH="515" HEIGHT="80" LAYER="0" NEXTITEM="-1" BACKITEM="-1" FillRule="1">
            <PageItemAttributes>
                <ItemAttribute Name="role" Type="string" Value="decoration" Parameter="" Relationship="none" RelationshipTo="" AutoAddTo="none"/>
            </PageItemAttributes>
        </PAGEOBJECT>
    </DOCUMENT>
</SCRIBUSUTF8NEW>
"##;

/// Number of page objects in [`FLYER`].
pub(super) const FLYER_OBJECTS: usize = 6;

pub(super) fn flyer() -> Document {
    Document::from_bytes(FLYER.as_bytes()).expect("fixture parses")
}
