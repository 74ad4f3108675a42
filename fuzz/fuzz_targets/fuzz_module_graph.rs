#![no_main]

use libfuzzer_sys::fuzz_target;

use gmtree::{NodeFilter, RenderOptions, TreePipeline};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let lines: Vec<&str> = content.lines().collect();

        // Unfiltered run: build and render must never panic
        if let Ok(report) = TreePipeline::new().run(&lines) {
            assert_eq!(
                report.lines(&RenderOptions::default()).count(),
                report.tree.node_count()
            );
        }

        // Filter on the last token of the input, if any
        if let Some(target) = content.split_whitespace().last() {
            let pipeline = TreePipeline::new().with_filter(NodeFilter::new().with_exact([target]));
            if let Ok(report) = pipeline.run(&lines) {
                assert!(report.tree.verify().is_ok());
            }
        }
    }
});
