//! # gencode CSS Import Advisor
//!
//! File: cli/src/prompt/imports.rs
//!
//! Maps detected styling frameworks to the import statement the prompt
//! recommends for each, in `CssFramework::ALL` order.
//!
use crate::detect::frameworks::{CssFramework, FrameworkFlags};

/// Recommended import statement for a framework.
pub fn import_statement(framework: CssFramework) -> &'static str {
    match framework {
        CssFramework::Tailwind => "import 'tailwindcss/tailwind.css';",
        CssFramework::StyledComponents => "import styled from 'styled-components';",
        CssFramework::ChakraUi => "import { ChakraProvider } from '@chakra-ui/react';",
        CssFramework::Bootstrap => "import 'bootstrap/dist/css/bootstrap.min.css';",
        CssFramework::Mui => "import { ThemeProvider } from '@mui/material/styles';",
        CssFramework::DaisyUi => "import { xxx } from 'react-daisyui';",
    }
}

/// One statement per set flag, in priority order.
pub fn css_imports(flags: &FrameworkFlags) -> Vec<&'static str> {
    flags
        .iter()
        .filter(|(_, set)| *set)
        .map(|(framework, _)| import_statement(framework))
        .collect()
}
