mod quiz_properties;
mod report_properties;
mod sequence_properties;
