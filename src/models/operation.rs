//! Server operations and the static table describing each one.
//!
//! Every operation is a thin configuration of the submission pipeline:
//! a validation rule, a fixed endpoint, a declared response kind, and the
//! copy shown on success or failure. Response kinds are fixed here rather
//! than sniffed from the response.

use super::file::{SelectedFile, SelectionMode};

/// How a successful response body is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    /// Body is the artifact; saved under the operation's default filename.
    Binary { filename: &'static str },
    /// Body is JSON carrying a `text` field.
    Text,
}

/// Scalar inputs an operation form carries besides its files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtraField {
    /// Page range expression such as `1,3,5-7`.
    Pages,
    /// Rotation angle in degrees.
    Angle,
}

impl ExtraField {
    /// Multipart field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::Angle => "angle",
        }
    }
}

/// Client-side precondition checked before any request is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validation {
    None,
    MinFiles {
        min: usize,
        message: &'static str,
    },
    NonEmptyField {
        field: ExtraField,
        message: &'static str,
    },
}

/// Static description of one operation.
#[derive(Debug, PartialEq, Eq)]
pub struct OperationSpec {
    pub operation: Operation,
    pub title: &'static str,
    pub description: &'static str,
    pub endpoint: &'static str,
    pub mode: SelectionMode,
    /// Multipart field name for the file parts.
    pub file_field: &'static str,
    /// Value for the input's `accept` attribute.
    pub accept: &'static str,
    pub extra: Option<ExtraField>,
    pub validation: Validation,
    pub response: ResponseKind,
    pub success_message: &'static str,
    /// Shown when a failure response carries no usable `error` field.
    pub fallback_error: &'static str,
}

/// The seven server operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Merge,
    Split,
    ExtractText,
    Rotate,
    Compress,
    ExtractPages,
    ImagesToPdf,
}

const PDF_ACCEPT: &str = ".pdf";
const IMAGE_ACCEPT: &str = ".png,.jpg,.jpeg";

static MERGE: OperationSpec = OperationSpec {
    operation: Operation::Merge,
    title: "Merge PDFs",
    description: "Combine multiple PDF files into one document.",
    endpoint: "/merge",
    mode: SelectionMode::Multi,
    file_field: "files",
    accept: PDF_ACCEPT,
    extra: None,
    validation: Validation::MinFiles {
        min: 2,
        message: "Please select at least 2 PDF files to merge",
    },
    response: ResponseKind::Binary {
        filename: "merged.pdf",
    },
    success_message: "PDFs merged successfully!",
    fallback_error: "Failed to merge PDFs",
};

static SPLIT: OperationSpec = OperationSpec {
    operation: Operation::Split,
    title: "Split PDF",
    description: "Split every page into its own PDF, delivered as a zip archive.",
    endpoint: "/split",
    mode: SelectionMode::Single,
    file_field: "file",
    accept: PDF_ACCEPT,
    extra: None,
    validation: Validation::None,
    response: ResponseKind::Binary {
        filename: "split_pages.zip",
    },
    success_message: "PDF split successfully!",
    fallback_error: "Failed to split PDF",
};

static EXTRACT_TEXT: OperationSpec = OperationSpec {
    operation: Operation::ExtractText,
    title: "Extract Text",
    description: "Pull the plain text out of a PDF.",
    endpoint: "/extract-text",
    mode: SelectionMode::Single,
    file_field: "file",
    accept: PDF_ACCEPT,
    extra: None,
    validation: Validation::None,
    response: ResponseKind::Text,
    success_message: "Text extracted successfully!",
    fallback_error: "Failed to extract text",
};

static ROTATE: OperationSpec = OperationSpec {
    operation: Operation::Rotate,
    title: "Rotate PDF",
    description: "Rotate every page by 90, 180 or 270 degrees.",
    endpoint: "/rotate",
    mode: SelectionMode::Single,
    file_field: "file",
    accept: PDF_ACCEPT,
    extra: Some(ExtraField::Angle),
    validation: Validation::None,
    response: ResponseKind::Binary {
        filename: "rotated.pdf",
    },
    success_message: "PDF rotated successfully!",
    fallback_error: "Failed to rotate PDF",
};

static COMPRESS: OperationSpec = OperationSpec {
    operation: Operation::Compress,
    title: "Compress PDF",
    description: "Shrink a PDF by removing duplicate objects.",
    endpoint: "/compress",
    mode: SelectionMode::Single,
    file_field: "file",
    accept: PDF_ACCEPT,
    extra: None,
    validation: Validation::None,
    response: ResponseKind::Binary {
        filename: "compressed.pdf",
    },
    success_message: "PDF compressed successfully!",
    fallback_error: "Failed to compress PDF",
};

static EXTRACT_PAGES: OperationSpec = OperationSpec {
    operation: Operation::ExtractPages,
    title: "Extract Pages",
    description: "Keep only the pages you list, e.g. 1,3,5-7.",
    endpoint: "/extract-pages",
    mode: SelectionMode::Single,
    file_field: "file",
    accept: PDF_ACCEPT,
    extra: Some(ExtraField::Pages),
    validation: Validation::NonEmptyField {
        field: ExtraField::Pages,
        message: "Please specify pages to extract (e.g., 1,3,5-7)",
    },
    response: ResponseKind::Binary {
        filename: "extracted_pages.pdf",
    },
    success_message: "Pages extracted successfully!",
    fallback_error: "Failed to extract pages",
};

static IMAGES_TO_PDF: OperationSpec = OperationSpec {
    operation: Operation::ImagesToPdf,
    title: "Images to PDF",
    description: "Turn PNG and JPEG images into a single PDF.",
    endpoint: "/images-to-pdf",
    mode: SelectionMode::Multi,
    file_field: "files",
    accept: IMAGE_ACCEPT,
    extra: None,
    validation: Validation::MinFiles {
        min: 1,
        message: "Please select at least one image file",
    },
    response: ResponseKind::Binary {
        filename: "images_to_pdf.pdf",
    },
    success_message: "PDF created from images successfully!",
    fallback_error: "Failed to create PDF from images",
};

impl Operation {
    /// All operations in display order.
    pub const ALL: [Operation; 7] = [
        Self::Merge,
        Self::Split,
        Self::ExtractText,
        Self::Rotate,
        Self::Compress,
        Self::ExtractPages,
        Self::ImagesToPdf,
    ];

    pub fn spec(self) -> &'static OperationSpec {
        match self {
            Self::Merge => &MERGE,
            Self::Split => &SPLIT,
            Self::ExtractText => &EXTRACT_TEXT,
            Self::Rotate => &ROTATE,
            Self::Compress => &COMPRESS,
            Self::ExtractPages => &EXTRACT_PAGES,
            Self::ImagesToPdf => &IMAGES_TO_PDF,
        }
    }

    /// URL slug, which is the endpoint path without its leading slash.
    pub fn slug(self) -> &'static str {
        self.spec().endpoint.trim_start_matches('/')
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.slug() == slug)
    }
}

impl OperationSpec {
    /// Checks the precondition against the current form contents.
    ///
    /// Returns the message to announce when it fails.
    pub fn validate<H>(&self, form: &FormSnapshot<H>) -> Result<(), &'static str> {
        match self.validation {
            Validation::None => Ok(()),
            Validation::MinFiles { min, message } => {
                if form.files.len() >= min {
                    Ok(())
                } else {
                    Err(message)
                }
            }
            Validation::NonEmptyField { field, message } => {
                let filled = form
                    .field(field.name())
                    .is_some_and(|value| !value.trim().is_empty());
                if filled { Ok(()) } else { Err(message) }
            }
        }
    }
}

/// Form contents captured at submit time.
#[derive(Clone, Debug, Default)]
pub struct FormSnapshot<H = ()> {
    pub files: Vec<SelectedFile<H>>,
    /// Scalar fields in insertion order.
    pub fields: Vec<(String, String)>,
}

impl<H> FormSnapshot<H> {
    pub fn new(files: Vec<SelectedFile<H>>) -> Self {
        Self {
            files,
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// One request to a server operation, built fresh per submission.
#[derive(Clone, Debug)]
pub struct OperationRequest<H = ()> {
    pub endpoint: &'static str,
    pub file_field: &'static str,
    pub files: Vec<SelectedFile<H>>,
    pub fields: Vec<(String, String)>,
}

impl<H> OperationRequest<H> {
    pub fn build(spec: &OperationSpec, form: FormSnapshot<H>) -> Self {
        Self {
            endpoint: spec.endpoint,
            file_field: spec.file_field,
            files: form.files,
            fields: form.fields,
        }
    }
}

/// A downloaded artifact waiting to be saved.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryArtifact {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub filename: String,
}

/// Tagged result of one submission.
#[derive(Clone, Debug, PartialEq)]
pub enum OperationOutcome {
    Binary(BinaryArtifact),
    Text { text: String },
    Failure { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(n: usize) -> Vec<SelectedFile> {
        (0..n)
            .map(|i| SelectedFile::detached(format!("{}.pdf", i), 10, ""))
            .collect()
    }

    #[test]
    fn test_endpoints_and_slugs() {
        let endpoints: Vec<&str> = Operation::ALL.iter().map(|op| op.spec().endpoint).collect();
        assert_eq!(
            endpoints,
            vec![
                "/merge",
                "/split",
                "/extract-text",
                "/rotate",
                "/compress",
                "/extract-pages",
                "/images-to-pdf",
            ]
        );
        for op in Operation::ALL {
            assert_eq!(op.spec().operation, op);
            assert_eq!(Operation::from_slug(op.slug()), Some(op));
        }
        assert_eq!(Operation::from_slug("unknown"), None);
    }

    #[test]
    fn test_response_kinds() {
        assert_eq!(Operation::ExtractText.spec().response, ResponseKind::Text);
        assert_eq!(
            Operation::Split.spec().response,
            ResponseKind::Binary {
                filename: "split_pages.zip"
            }
        );
        assert_eq!(
            Operation::Merge.spec().response,
            ResponseKind::Binary {
                filename: "merged.pdf"
            }
        );
    }

    #[test]
    fn test_merge_requires_two_files() {
        let spec = Operation::Merge.spec();
        assert_eq!(
            spec.validate(&FormSnapshot::new(files(1))),
            Err("Please select at least 2 PDF files to merge")
        );
        assert_eq!(spec.validate(&FormSnapshot::new(files(2))), Ok(()));
    }

    #[test]
    fn test_images_requires_one_file() {
        let spec = Operation::ImagesToPdf.spec();
        assert_eq!(
            spec.validate(&FormSnapshot::new(files(0))),
            Err("Please select at least one image file")
        );
        assert_eq!(spec.validate(&FormSnapshot::new(files(1))), Ok(()));
    }

    #[test]
    fn test_extract_pages_requires_pages() {
        let spec = Operation::ExtractPages.spec();
        let message = Err("Please specify pages to extract (e.g., 1,3,5-7)");

        assert_eq!(spec.validate(&FormSnapshot::new(files(1))), message);
        assert_eq!(
            spec.validate(&FormSnapshot::new(files(1)).with_field("pages", "")),
            message
        );
        assert_eq!(
            spec.validate(&FormSnapshot::new(files(1)).with_field("pages", "  \t ")),
            message
        );
        assert_eq!(
            spec.validate(&FormSnapshot::new(files(1)).with_field("pages", "1,3,5-7")),
            Ok(())
        );
    }

    #[test]
    fn test_unvalidated_operations_accept_anything() {
        for op in [
            Operation::Split,
            Operation::ExtractText,
            Operation::Rotate,
            Operation::Compress,
        ] {
            assert_eq!(op.spec().validate(&FormSnapshot::new(files(0))), Ok(()));
        }
    }

    #[test]
    fn test_request_carries_form_contents() {
        let form = FormSnapshot::new(files(1)).with_field("angle", "180");
        let request = OperationRequest::build(Operation::Rotate.spec(), form);
        assert_eq!(request.endpoint, "/rotate");
        assert_eq!(request.file_field, "file");
        assert_eq!(request.files.len(), 1);
        assert_eq!(request.fields, vec![("angle".to_string(), "180".to_string())]);
    }
}
