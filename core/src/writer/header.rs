/// Fixed comment block written above the generated dictionary
///
/// `output_file` is the destination as given on the command line,
/// `source_file` the private.dic it was generated from.
pub fn header(output_file: &str, source_file: &str) -> String {
    format!(
        "# {output_file}\n\
         # Autogenerated by make-private-dict from {source_file}\n\
         # (the private.dic file of the mdcm library, itself derived from dcmtk and gdcm).\n\
         # Do not edit by hand; regenerate from the source file instead.\n\
         \n\
         # This is a dictionary of DICOM dictionaries.\n\
         # The outer dictionary key is the Private Creator name,\n\
         #   the inner dictionary is a map of DICOM tag to (VR, type, name, isRetired)\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_names_files() {
        let text = header("../dicom/_private_dict.py", "mdcm-r52-private.dic");

        assert!(text.starts_with("# ../dicom/_private_dict.py\n"));
        assert!(text.contains("from mdcm-r52-private.dic"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_header_is_all_comments() {
        let text = header("out.py", "in.dic");
        assert!(text
            .lines()
            .all(|line| line.is_empty() || line.starts_with('#')));
    }
}
