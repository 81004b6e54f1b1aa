//! PPTX generation from a vehicle listing.
//!
//! This module writes the complete single-slide package: OOXML plumbing
//! parts plus one slide carrying the title block, specification table
//! and contact footer.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use forecourt_listing::VehicleListing;

use crate::constants::*;
use crate::error::Result;
use crate::layout::{self, Frame};

/// PPTX document writer for one vehicle summary slide
pub struct PptxWriter {
    /// The validated record to render
    listing: VehicleListing,

    /// Document author for docProps (defaults to the application name)
    author: Option<String>,
}

impl PptxWriter {
    /// Create a writer for a finished listing
    pub fn new(listing: VehicleListing) -> Self {
        Self {
            listing,
            author: None,
        }
    }

    /// Set the document author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Generate the PPTX as bytes
    pub fn generate(&self) -> Result<Vec<u8>> {
        let cursor = Cursor::new(Vec::new());
        let mut zip = ZipWriter::new(cursor);

        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        self.write_content_types(&mut zip, options)?;
        self.write_root_rels(&mut zip, options)?;
        self.write_app_xml(&mut zip, options)?;
        self.write_core_xml(&mut zip, options)?;
        self.write_presentation_xml(&mut zip, options)?;
        self.write_presentation_rels(&mut zip, options)?;
        self.write_pres_props(&mut zip, options)?;
        self.write_table_styles(&mut zip, options)?;
        self.write_view_props(&mut zip, options)?;
        self.write_theme(&mut zip, options)?;
        self.write_slide_master(&mut zip, options)?;
        self.write_slide_layout(&mut zip, options)?;
        self.write_slide(&mut zip, options)?;

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Generate and write the PPTX to `path`, overwriting any existing file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let bytes = self.generate()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Write [Content_Types].xml
    fn write_content_types<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("[Content_Types].xml", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
  <Override PartName="/ppt/presProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"/>
  <Override PartName="/ppt/tableStyles.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"/>
  <Override PartName="/ppt/viewProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"/>
  <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
  <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
  <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
  <Override PartName="/ppt/slides/slide1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
</Types>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write _rels/.rels
    fn write_root_rels<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("_rels/.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write docProps/app.xml
    fn write_app_xml<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("docProps/app.xml", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <TotalTime>0</TotalTime>
  <Words>0</Words>
  <Application>forecourt</Application>
  <PresentationFormat>On-screen Show (4:3)</PresentationFormat>
  <Paragraphs>0</Paragraphs>
  <Slides>1</Slides>
  <Notes>0</Notes>
  <HiddenSlides>0</HiddenSlides>
  <MMClips>0</MMClips>
  <ScaleCrop>false</ScaleCrop>
  <LinksUpToDate>false</LinksUpToDate>
  <SharedDoc>false</SharedDoc>
  <HyperlinksChanged>false</HyperlinksChanged>
  <AppVersion>1.0</AppVersion>
</Properties>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write docProps/core.xml
    fn write_core_xml<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("docProps/core.xml", options)?;

        let author = self.author.as_deref().unwrap_or("forecourt");
        let now = fixed_timestamp();

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{}</dc:title>
  <dc:creator>{}</dc:creator>
  <cp:lastModifiedBy>{}</cp:lastModifiedBy>
  <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>
</cp:coreProperties>"#,
            escape_xml(&self.listing.title),
            escape_xml(author),
            escape_xml(author),
            now,
            now
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/presentation.xml
    fn write_presentation_xml<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/presentation.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">
  <p:sldMasterIdLst>
    <p:sldMasterId id="2147483648" r:id="rId1"/>
  </p:sldMasterIdLst>
  <p:sldIdLst>
    <p:sldId id="256" r:id="rId4"/>
  </p:sldIdLst>
  <p:sldSz cx="{}" cy="{}"/>
  <p:notesSz cx="{}" cy="{}"/>
</p:presentation>"#,
            NS_DRAWING,
            NS_RELATIONSHIPS,
            NS_PRESENTATION,
            SLIDE_WIDTH_EMU,
            SLIDE_HEIGHT_EMU,
            SLIDE_HEIGHT_EMU, // Notes are rotated
            SLIDE_WIDTH_EMU
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/_rels/presentation.xml.rels
    fn write_presentation_rels<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/_rels/presentation.xml.rels", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="{}" Target="slideMasters/slideMaster1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps" Target="presProps.xml"/>
  <Relationship Id="rId3" Type="{}" Target="theme/theme1.xml"/>
  <Relationship Id="rId4" Type="{}" Target="slides/slide1.xml"/>
</Relationships>"#,
            REL_TYPE_SLIDE_MASTER, REL_TYPE_THEME, REL_TYPE_SLIDE
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/presProps.xml
    fn write_pres_props<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/presProps.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentationPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:extLst/>
</p:presentationPr>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/tableStyles.xml
    fn write_table_styles<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/tableStyles.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
            NS_DRAWING
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/viewProps.xml
    fn write_view_props<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/viewProps.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:viewPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:normalViewPr>
    <p:restoredLeft sz="15620"/>
    <p:restoredTop sz="94660"/>
  </p:normalViewPr>
  <p:slideViewPr>
    <p:cSldViewPr>
      <p:cViewPr>
        <p:scale>
          <a:sx n="100" d="100"/>
          <a:sy n="100" d="100"/>
        </p:scale>
        <p:origin x="0" y="0"/>
      </p:cViewPr>
    </p:cSldViewPr>
  </p:slideViewPr>
</p:viewPr>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/theme/theme1.xml
    fn write_theme<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/theme/theme1.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="{}" name="forecourt">
  <a:themeElements>
    <a:clrScheme name="Office">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="44546A"/></a:dk2>
      <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
      <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
      <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
      <a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
      <a:accent4><a:srgbClr val="FFC000"/></a:accent4>
      <a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
      <a:accent6><a:srgbClr val="70AD47"/></a:accent6>
      <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
      <a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="Office">
      <a:majorFont>
        <a:latin typeface="Calibri Light"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:majorFont>
      <a:minorFont>
        <a:latin typeface="Calibri"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="Office">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#,
            NS_DRAWING
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/slideMasters/slideMaster1.xml
    fn write_slide_master<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/slideMasters/slideMaster1.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:cSld>
    <p:bg>
      <p:bgRef idx="1001">
        <a:schemeClr val="bg1"/>
      </p:bgRef>
    </p:bg>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>
    <p:sldLayoutId id="2147483649" r:id="rId1"/>
  </p:sldLayoutIdLst>
</p:sldMaster>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
        );

        zip.write_all(content.as_bytes())?;

        // Write slide master rels
        zip.start_file("ppt/slideMasters/_rels/slideMaster1.xml.rels", options)?;

        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="{}" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="{}" Target="../theme/theme1.xml"/>
</Relationships>"#,
            REL_TYPE_SLIDE_LAYOUT, REL_TYPE_THEME
        );

        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Write ppt/slideLayouts/slideLayout1.xml (blank layout)
    fn write_slide_layout<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/slideLayouts/slideLayout1.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="blank" preserve="1">
  <p:cSld name="Blank">
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
        );

        zip.write_all(content.as_bytes())?;

        // Layout rels
        zip.start_file("ppt/slideLayouts/_rels/slideLayout1.xml.rels", options)?;

        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="{}" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#,
            REL_TYPE_SLIDE_MASTER
        );

        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Write ppt/slides/slide1.xml and its rels
    fn write_slide<W: Write + std::io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/slides/slide1.xml", options)?;
        zip.write_all(self.slide_xml().as_bytes())?;

        zip.start_file("ppt/slides/_rels/slide1.xml.rels", options)?;

        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="{}" Target="../slideLayouts/slideLayout1.xml"/>
</Relationships>"#,
            REL_TYPE_SLIDE_LAYOUT
        );

        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Generate the slide XML with the three fixed regions
    fn slide_xml(&self) -> String {
        let mut shapes = String::new();
        shapes.push_str(&self.dealer_name_shape());
        shapes.push_str(&self.price_badge_shape());
        shapes.push_str(&self.vehicle_title_shape());
        shapes.push_str(&self.spec_table_frame());
        shapes.push_str(&self.contact_shape());

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
{}    </p:spTree>
  </p:cSld>
</p:sld>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION, shapes
        )
    }

    /// Dealer name, top left, large and bold
    fn dealer_name_shape(&self) -> String {
        text_box_shape(
            2,
            "Dealer Name",
            layout::DEALER_NAME,
            &paragraph(
                "l",
                &text_run(
                    &self.listing.dealer.name,
                    layout::DEALER_NAME_SIZE,
                    true,
                    layout::TEXT_COLOR,
                    None,
                ),
            ),
        )
    }

    /// Price badge, top right: solid-filled rectangle with centered text
    fn price_badge_shape(&self) -> String {
        let Frame { x, y, cx, cy } = layout::PRICE_BADGE;
        let para = paragraph(
            "ctr",
            &text_run(
                &self.listing.price,
                layout::PRICE_SIZE,
                true,
                layout::PRICE_BADGE_TEXT,
                None,
            ),
        );

        format!(
            r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="3" name="Price Badge"/>
          <p:cNvSpPr/>
          <p:nvPr/>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm>
            <a:off x="{x}" y="{y}"/>
            <a:ext cx="{cx}" cy="{cy}"/>
          </a:xfrm>
          <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
          <a:solidFill><a:srgbClr val="{fill}"/></a:solidFill>
          <a:ln><a:solidFill><a:srgbClr val="{fill}"/></a:solidFill></a:ln>
        </p:spPr>
        <p:txBody>
          <a:bodyPr anchor="ctr"/>
          <a:lstStyle/>
{para}        </p:txBody>
      </p:sp>
"#,
            fill = layout::PRICE_BADGE_FILL,
        )
    }

    /// Vehicle title, beneath the dealer name
    fn vehicle_title_shape(&self) -> String {
        text_box_shape(
            4,
            "Vehicle Title",
            layout::VEHICLE_TITLE,
            &paragraph(
                "l",
                &text_run(
                    &self.listing.title,
                    layout::VEHICLE_TITLE_SIZE,
                    true,
                    layout::TEXT_COLOR,
                    None,
                ),
            ),
        )
    }

    /// The fixed 10x2 specification table
    fn spec_table_frame(&self) -> String {
        let Frame { x, y, cx, cy } = layout::SPEC_TABLE;
        let row_height = cy / layout::SPEC_ROWS as i64;

        let mut rows = String::new();
        for (label, value) in self.spec_rows() {
            rows.push_str(&table_row(row_height, label, &value));
        }

        format!(
            r#"      <p:graphicFrame>
        <p:nvGraphicFramePr>
          <p:cNvPr id="5" name="Specification Table"/>
          <p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>
          <p:nvPr/>
        </p:nvGraphicFramePr>
        <p:xfrm>
          <a:off x="{x}" y="{y}"/>
          <a:ext cx="{cx}" cy="{cy}"/>
        </p:xfrm>
        <a:graphic>
          <a:graphicData uri="{uri}">
            <a:tbl>
              <a:tblPr firstRow="0" bandRow="0">
                <a:tableStyleId>{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}</a:tableStyleId>
              </a:tblPr>
              <a:tblGrid>
                <a:gridCol w="{label_w}"/>
                <a:gridCol w="{value_w}"/>
              </a:tblGrid>
{rows}            </a:tbl>
          </a:graphicData>
        </a:graphic>
      </p:graphicFrame>
"#,
            uri = URI_TABLE,
            label_w = layout::LABEL_COL_WIDTH,
            value_w = layout::VALUE_COL_WIDTH,
        )
    }

    /// Contact line, centered at the bottom
    fn contact_shape(&self) -> String {
        let dealer = &self.listing.dealer;
        let contact = format!(
            "Call: {}  |  Email: {}  |  Web: {}",
            dealer.phone, dealer.email, dealer.website
        );

        text_box_shape(
            6,
            "Contact Details",
            layout::CONTACT,
            &paragraph(
                "ctr",
                &text_run(&contact, layout::CONTACT_SIZE, false, layout::TEXT_COLOR, None),
            ),
        )
    }

    /// Table rows in fixed label order
    fn spec_rows(&self) -> [(&'static str, String); layout::SPEC_ROWS] {
        let v = &self.listing;
        [
            ("Registration", v.registration.clone()),
            ("Year", v.year.clone()),
            ("Gearbox", v.gearbox.to_string()),
            ("Engine Size", v.engine_size.clone()),
            ("Fuel Type", v.fuel_type.to_string()),
            ("Owners", v.owners.clone()),
            ("Mileage", v.mileage.clone()),
            ("ULEZ", v.ulez.to_string()),
            ("MOT Expiry", v.mot_expiry.clone()),
            ("Specs", v.specs.join(", ")),
        ]
    }
}

/// Generate an unfilled text box shape
fn text_box_shape(id: u32, name: &str, frame: Frame, paragraph: &str) -> String {
    let Frame { x, y, cx, cy } = frame;

    format!(
        r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{id}" name="{name}"/>
          <p:cNvSpPr txBox="1"/>
          <p:nvPr/>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm>
            <a:off x="{x}" y="{y}"/>
            <a:ext cx="{cx}" cy="{cy}"/>
          </a:xfrm>
          <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
          <a:noFill/>
        </p:spPr>
        <p:txBody>
          <a:bodyPr wrap="square" rtlCol="0"/>
          <a:lstStyle/>
{paragraph}        </p:txBody>
      </p:sp>
"#,
    )
}

/// Generate an aligned paragraph wrapping a single run
fn paragraph(align: &str, run: &str) -> String {
    format!(
        "          <a:p>\n            <a:pPr algn=\"{align}\"/>\n{run}          </a:p>\n"
    )
}

/// Generate a styled text run
fn text_run(text: &str, size: u32, bold: bool, color: &str, typeface: Option<&str>) -> String {
    let bold = if bold { " b=\"1\"" } else { "" };
    let latin = typeface
        .map(|t| format!("<a:latin typeface=\"{t}\"/>"))
        .unwrap_or_default();

    format!(
        "            <a:r>\n              <a:rPr lang=\"en-US\" sz=\"{size}\"{bold}><a:solidFill><a:srgbClr val=\"{color}\"/></a:solidFill>{latin}</a:rPr>\n              <a:t>{}</a:t>\n            </a:r>\n",
        escape_xml(text)
    )
}

/// Generate one label/value table row
fn table_row(height: i64, label: &str, value: &str) -> String {
    format!(
        "              <a:tr h=\"{height}\">\n{}{}              </a:tr>\n",
        table_cell(label, true),
        table_cell(value, false)
    )
}

/// Generate a table cell: label cells get the dark fill and bold white
/// text, value cells the light fill and black text
fn table_cell(text: &str, is_label: bool) -> String {
    let (fill, color, bold) = if is_label {
        (layout::LABEL_FILL, layout::LABEL_TEXT, " b=\"1\"")
    } else {
        (layout::VALUE_FILL, layout::TEXT_COLOR, "")
    };

    format!(
        r#"                <a:tc>
                  <a:txBody>
                    <a:bodyPr/>
                    <a:lstStyle/>
                    <a:p>
                      <a:pPr algn="l"/>
                      <a:r>
                        <a:rPr lang="en-US" sz="{size}"{bold}><a:solidFill><a:srgbClr val="{color}"/></a:solidFill><a:latin typeface="{typeface}"/></a:rPr>
                        <a:t>{text}</a:t>
                      </a:r>
                    </a:p>
                  </a:txBody>
                  <a:tcPr marL="{side}" marR="{side}" marT="{vert}" marB="{vert}" anchor="ctr">
                    <a:solidFill><a:srgbClr val="{fill}"/></a:solidFill>
                  </a:tcPr>
                </a:tc>
"#,
        size = layout::TABLE_SIZE,
        typeface = layout::TABLE_TYPEFACE,
        side = layout::CELL_SIDE_INSET,
        vert = layout::CELL_VERTICAL_INSET,
        text = escape_xml(text),
    )
}

/// Escape XML special characters in user-supplied text
fn escape_xml(s: &str) -> String {
    quick_xml::escape::escape(s).into_owned()
}

/// Fixed document timestamp, keeping output byte-for-byte reproducible
fn fixed_timestamp() -> &'static str {
    "2025-01-01T00:00:00Z"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use forecourt_listing::{ListingOverrides, VehicleListing};
    use zip::ZipArchive;

    fn read_part(bytes: Vec<u8>, name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_generate_valid_archive() {
        let writer = PptxWriter::new(VehicleListing::default());
        let bytes = writer.generate().unwrap();
        assert!(!bytes.is_empty());

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/app.xml",
            "docProps/core.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/theme/theme1.xml",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
        ] {
            assert!(archive.by_name(part).is_ok(), "missing part {part}");
        }
    }

    #[test]
    fn test_default_record_renders_placeholders() {
        let writer = PptxWriter::new(VehicleListing::default());
        let slide = read_part(writer.generate().unwrap(), "ppt/slides/slide1.xml");

        assert!(slide.contains("Your Dealership"));
        assert!(slide.contains("Price on enquiry"));
        assert!(slide.contains("Vehicle Title"));
        assert!(slide.contains("Automatic"));
        assert!(slide.contains("Diesel"));
        assert!(slide.contains("Unknown"));
        assert!(slide.contains("Call: 0000 000 0000  |  Email: sales@example.com  |  Web: www.example.com"));
    }

    #[test]
    fn test_table_has_fixed_labels_in_order() {
        let writer = PptxWriter::new(VehicleListing::default());
        let slide = read_part(writer.generate().unwrap(), "ppt/slides/slide1.xml");

        let labels = [
            "Registration", "Year", "Gearbox", "Engine Size", "Fuel Type",
            "Owners", "Mileage", "ULEZ", "MOT Expiry", "Specs",
        ];
        let mut last = 0;
        for label in labels {
            let pos = slide[last..]
                .find(&format!("<a:t>{label}</a:t>"))
                .unwrap_or_else(|| panic!("label {label} missing or out of order"));
            last += pos;
        }
    }

    #[test]
    fn test_specs_are_comma_joined() {
        let listing = VehicleListing::default().apply_overrides(&ListingOverrides {
            specs: Some(vec!["Sat Nav".to_string(), "Alloy Wheels".to_string()]),
            ..Default::default()
        });
        let slide = read_part(
            PptxWriter::new(listing).generate().unwrap(),
            "ppt/slides/slide1.xml",
        );
        assert!(slide.contains("<a:t>Sat Nav, Alloy Wheels</a:t>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let listing = VehicleListing::default().apply_overrides(&ListingOverrides {
            title: Some("Smith & Sons <Motors>".to_string()),
            ..Default::default()
        });
        let slide = read_part(
            PptxWriter::new(listing).generate().unwrap(),
            "ppt/slides/slide1.xml",
        );
        assert!(slide.contains("Smith &amp; Sons &lt;Motors&gt;"));
        assert!(!slide.contains("Smith & Sons"));
    }

    #[test]
    fn test_badge_and_table_styling() {
        let writer = PptxWriter::new(VehicleListing::default());
        let slide = read_part(writer.generate().unwrap(), "ppt/slides/slide1.xml");

        assert!(slide.contains("<a:srgbClr val=\"F70000\"/>"));
        assert!(slide.contains("<a:srgbClr val=\"003864\"/>"));
        assert!(slide.contains("<a:srgbClr val=\"ECECEC\"/>"));
        assert!(slide.contains("<a:latin typeface=\"Calibri\"/>"));
        // Two columns: 3.2" and 5.8"
        assert!(slide.contains("<a:gridCol w=\"2926080\"/>"));
        assert!(slide.contains("<a:gridCol w=\"5304960\"/>"));
    }

    #[test]
    fn test_core_props_carry_title_and_author() {
        let writer = PptxWriter::new(VehicleListing::default()).with_author("Test Author");
        let core = read_part(writer.generate().unwrap(), "docProps/core.xml");
        assert!(core.contains("<dc:title>Vehicle Title</dc:title>"));
        assert!(core.contains("<dc:creator>Test Author</dc:creator>"));
    }

    #[test]
    fn test_save_to_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vehicle.pptx");
        std::fs::write(&path, b"stale").unwrap();

        let writer = PptxWriter::new(VehicleListing::default());
        writer.save_to(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(ZipArchive::new(Cursor::new(bytes)).is_ok());
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Hello & World"), "Hello &amp; World");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_every_xml_part_is_well_formed() {
        let listing = VehicleListing::default().apply_overrides(&ListingOverrides {
            title: Some("Smith & Sons <Motors>".to_string()),
            price: Some("£9,500 \"reduced\"".to_string()),
            ..Default::default()
        });
        let bytes = PptxWriter::new(listing).generate().unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(String::from).collect();
        for name in names {
            let mut content = String::new();
            archive
                .by_name(&name)
                .unwrap()
                .read_to_string(&mut content)
                .unwrap();

            let mut reader = quick_xml::Reader::from_str(&content);
            loop {
                match reader.read_event() {
                    Ok(quick_xml::events::Event::Eof) => break,
                    Ok(_) => {}
                    Err(e) => panic!("{name} is not well-formed XML: {e}"),
                }
            }
        }
    }
}
