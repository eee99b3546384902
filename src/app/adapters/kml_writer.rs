//! KML layer writer
//!
//! Produces one KML 2.2 document per conversion: a document name carrying
//! the layer title and date, a single shared style, and one placemark per
//! accepted record with its HTML description in a CDATA section.

use crate::app::models::PointRecord;
use crate::config::KmlConfig;
use crate::constants::{KML_NAMESPACE, KML_STYLE_ID, KML_TITLE_DATE_FORMAT};
use crate::{Error, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

fn kml_error(error: impl std::fmt::Display) -> Error {
    Error::kml_writing(error.to_string())
}

fn is_url(icon: &str) -> bool {
    icon.starts_with("http://") || icon.starts_with("https://")
}

fn image_mime_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

/// Writer for placemark layers
#[derive(Debug, Clone)]
pub struct KmlWriter {
    config: KmlConfig,
}

impl KmlWriter {
    pub fn new(config: KmlConfig) -> Self {
        Self { config }
    }

    /// Document name: configured title (or `fallback_title`) followed by the
    /// date as dd/mm/yy
    pub fn document_name(&self, fallback_title: &str, date: NaiveDate) -> String {
        let title = self.config.title.as_deref().unwrap_or(fallback_title);
        format!("{} {}", title, date.format(KML_TITLE_DATE_FORMAT))
    }

    /// Icon reference for the shared style
    ///
    /// URLs are always referenced. A local path is referenced as given,
    /// unless embedding is enabled, in which case the image is inlined as a
    /// base64 data URI.
    pub fn icon_href(&self) -> Result<Option<String>> {
        let Some(icon) = self.config.icon.as_deref() else {
            return Ok(None);
        };

        if is_url(icon) {
            if self.config.embed_icon {
                warn!("Icon {} is a URL, it is referenced instead of embedded", icon);
            }
            return Ok(Some(icon.to_string()));
        }

        if !self.config.embed_icon {
            return Ok(Some(icon.to_string()));
        }

        let path = Path::new(icon);
        let bytes = std::fs::read(path)
            .map_err(|e| Error::io(format!("Failed to read icon {}", path.display()), e))?;
        debug!("Embedding icon {} ({} bytes)", path.display(), bytes.len());

        Ok(Some(format!(
            "data:{};base64,{}",
            image_mime_type(path),
            STANDARD.encode(bytes)
        )))
    }

    /// Serialize the layer
    pub fn write<W: Write>(&self, out: W, document_name: &str, records: &[PointRecord]) -> Result<()> {
        let icon_href = self.icon_href()?;
        let label_color = self.config.label_color.as_str();
        let style_url = format!("#{}", KML_STYLE_ID);

        let mut writer = Writer::new_with_indent(out, b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(kml_error)?;

        writer
            .create_element("kml")
            .with_attribute(("xmlns", KML_NAMESPACE))
            .write_inner_content(|kml| {
                kml.create_element("Document").write_inner_content(|document| {
                    document
                        .create_element("name")
                        .write_text_content(BytesText::new(document_name))?;

                    document
                        .create_element("Style")
                        .with_attribute(("id", KML_STYLE_ID))
                        .write_inner_content(|style| {
                            if let Some(href) = &icon_href {
                                style.create_element("IconStyle").write_inner_content(
                                    |icon_style| {
                                        icon_style.create_element("Icon").write_inner_content(
                                            |icon| {
                                                icon.create_element("href")
                                                    .write_text_content(BytesText::new(href))?;
                                                Ok(())
                                            },
                                        )?;
                                        Ok(())
                                    },
                                )?;
                            }
                            style
                                .create_element("LabelStyle")
                                .write_inner_content(|label| {
                                    label
                                        .create_element("color")
                                        .write_text_content(BytesText::new(label_color))?;
                                    Ok(())
                                })?;
                            Ok(())
                        })?;

                    for record in records {
                        write_placemark(document, record, &style_url)?;
                    }
                    Ok(())
                })?;
                Ok(())
            })
            .map_err(kml_error)?;

        writer.get_mut().flush().map_err(kml_error)
    }

    /// Serialize the layer to a file, replacing it if present
    pub fn write_file(&self, path: &Path, document_name: &str, records: &[PointRecord]) -> Result<()> {
        let file = std::fs::File::create(path)
            .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

        self.write(std::io::BufWriter::new(file), document_name, records)?;

        info!("Wrote {} placemarks to {}", records.len(), path.display());
        Ok(())
    }
}

/// Split text into CDATA sections so no section contains `]]>`
fn cdata_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut rest = text;
    while let Some(position) = rest.find("]]>") {
        sections.push(&rest[..position + 2]);
        rest = &rest[position + 2..];
    }
    sections.push(rest);
    sections
}

fn write_placemark<W: Write>(
    writer: &mut Writer<W>,
    record: &PointRecord,
    style_url: &str,
) -> std::io::Result<()> {
    let coordinates = format!("{},{}", record.longitude, record.latitude);

    writer
        .create_element("Placemark")
        .write_inner_content(|placemark| {
            placemark
                .create_element("name")
                .write_text_content(BytesText::new(&record.name))?;
            placemark.write_event(Event::Start(BytesStart::new("description")))?;
            for section in cdata_sections(&record.description) {
                placemark.write_event(Event::CData(BytesCData::new(section)))?;
            }
            placemark.write_event(Event::End(BytesEnd::new("description")))?;
            placemark
                .create_element("styleUrl")
                .write_text_content(BytesText::new(style_url))?;
            placemark.create_element("Point").write_inner_content(|point| {
                point
                    .create_element("coordinates")
                    .write_text_content(BytesText::new(&coordinates))?;
                Ok(())
            })?;
            Ok(())
        })?;

    Ok(())
}
