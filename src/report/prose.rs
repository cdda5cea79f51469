//! Authored text of each section.
//!
//! One function per section, each returning its blocks in display order.
//! Only `render` in the parent module dispatches to these.

use super::content::ContentBlock::{self, Header, Paragraph, Subheader, Table, Title};
use super::tables::{data_sources_table, model_results_table};

pub const REPORT_TITLE: &str = "Miami-Dade Traffic Analysis";

pub(super) fn abstract_text() -> Vec<ContentBlock> {
    vec![
        Title(REPORT_TITLE),
        Header("Abstract"),
        Paragraph(
            "Miami's growing population and vehicle count have led to significant infrastructure challenges, \
             including increased traffic congestion, longer commutes, higher fuel consumption, and more accidents. \
             This study examines the relationship between bus routes and traffic incidents in Miami, aiming to \
             optimize bus routes to reduce congestion and improve road safety. By analyzing spatial traffic data, \
             the research provides actionable insights for decision-makers. Utilizing machine learning, we develop \
             an interpretable predictive model that incorporates traffic signals, bus routes, historical traffic \
             counts, and street characteristics. The model highlights key factors in predicting incident risks and \
             provides visualizations of traffic incidents in relation to population density and public \
             transportation coverage. This approach helps identify road segments needing more public \
             transportation, supporting data-driven urban planning and enhancing overall safety and efficiency.",
        ),
    ]
}

pub(super) fn introduction() -> Vec<ContentBlock> {
    vec![
        Header("Introduction"),
        Paragraph(
            "As Miami continues to grow, the city\u{2019}s infrastructure struggles to keep pace with the rising \
             population and vehicle count. Traffic congestion has become a daily challenge, leading to longer \
             commutes, higher fuel consumption, and increased accident rates. These issues underscore the urgent \
             need for effective solutions to improve urban mobility and safety. Public transportation plays a \
             pivotal role in reducing traffic congestion by offering a viable alternative to personal vehicle \
             usage. However, gaps in the existing public transportation network limit its effectiveness. \
             Addressing these gaps is essential to enhance the efficiency of the transportation system and \
             improve overall urban mobility. This research aims to investigate the relationship between bus \
             routes and traffic incidents in Miami, with a focus on identifying how optimizing bus routes can \
             alleviate congestion and enhance road safety. By analyzing spatial traffic data, we seek to provide \
             actionable insights for decision makers. The findings of this research will contribute to the \
             academic understanding of urban mobility and provide data-driven recommendations for optimizing \
             public transportation routes. These insights will not only help reduce traffic congestion but also \
             improve the safety and quality of life for residents of Miami.",
        ),
    ]
}

pub(super) fn goals() -> Vec<ContentBlock> {
    vec![
        Header("Goals"),
        Paragraph(
            "Within the scope of model application and use cases, we have two goals: Develop an explainable \
             predictive model and provide insights for decision makers. Using machine learning techniques, we \
             want to build a model that incorporates various data points such as number of traffic signals and \
             bus routes, historical traffic counts, and other street characteristics. We want to ensure that the \
             model outputs are interpretable, highlighting the significance of each factor in predicting incident \
             risks. Also, we strive to provide clear visualizations and reports illustrating the correlation \
             between traffic incidents and factors such as population density and public transportation \
             coverage. Regarding the scope of city planning, we anticipate being able to enhance public \
             transportation planning and support data-driven urban planning. Stakeholders will be able to use \
             the predictive model to pinpoint road segments that would benefit most from increased public \
             transportation options by assessing current bus route coverage and identifying gaps where new \
             routes could alleviate traffic congestion and improve safety. We can support data-driven decision \
             making by integrating various datasets \u{2013} including incidents, road characteristics, \
             historical traffic counts, and bus routes \u{2013} into a comprehensive analysis framework. This \
             framework can be used to validate urban planning, ensuring that data insights are systematically \
             used to inform policy and project development.",
        ),
    ]
}

pub(super) fn objectives() -> Vec<ContentBlock> {
    vec![
        Header("Objectives"),
        Paragraph("The primary objectives of this research are:"),
        ContentBlock::numbered(&[
            "To analyze the correlation between the number of bus routes and the frequency of traffic incidents \
             on various road segments.",
            "To identify road segments that are prone to traffic congestion and accidents and currently lack \
             sufficient public transportation options.",
            "To develop a model that recommends optimal locations for introducing additional bus routes to \
             enhance urban mobility and safety.",
            "Identify factors that heavily impact the classification of an incident as probable (1) or \
             unlikely (0).",
        ]),
        Paragraph(
            "The main deliverable for this project is a completed classification model that can classify a \
             traffic incident under one of two classes: certain or unlikely. This model could then be used to \
             help city officials and other stakeholders pinpoint areas of congestion and determining where \
             additional bus routes are needed to mitigate the risk of incidents.",
        ),
    ]
}

pub(super) fn motivations() -> Vec<ContentBlock> {
    vec![
        Header("Motivations"),
        Paragraph(
            "The motivation for this project stems from the pressing need to address traffic congestion and \
             accident rates in urban areas, particularly in Miami. As the population continues to grow, the \
             existing infrastructure faces increasing strain, leading to longer commute times, higher fuel \
             consumption, and a rise in traffic-related incidents. Public transportation, especially bus routes, \
             plays a crucial role in alleviating these issues by offering an alternative to personal vehicle \
             use. However, there are gaps in the current public transportation network that need to be \
             identified and addressed. By analyzing the correlation between bus routes and traffic incidents, we \
             aim to provide urban planners and city officials with data-driven insights to optimize bus routes, \
             improve traffic flow, and enhance overall safety. This project not only seeks to contribute to the \
             academic understanding of urban mobility but also aims to have a tangible impact on the quality of \
             life for residents in Miami.",
        ),
    ]
}

pub(super) fn prior_art() -> Vec<ContentBlock> {
    vec![
        Header("Prior Art & Challenges"),
        Paragraph(
            "There have been previous studies that have explored various aspects of traffic congestion and \
             public transportation efficiency, yet significant gaps remain in understanding the relationship \
             between bus routes and traffic incidents. For instance, while some research has focused on \
             optimizing bus schedules and routes to reduce delays, it often lacks a comprehensive analysis that \
             includes traffic incident data. Other studies have examined traffic congestion patterns but \
             unfortunately didn't adequately consider the role of public transportation. One of the primary \
             challenges in our project is the integration of diverse datasets from multiple sources, such as \
             TomTom Traffic APIs, Miami-Dade County, and FDOT. Ensuring data consistency between sources, \
             handling missing values, and accurately spatially merging these datasets were complex tasks that \
             took most of our time. Additionally, developing a classification model that can reliably predict \
             traffic incidents while being interpretable to decision-makers was another significant challenge \
             we had to consider. However, we understood that overcoming these obstacles was crucial for \
             providing actionable insights that can lead to effective interventions in urban mobility planning.",
        ),
    ]
}

pub(super) fn data_sources() -> Vec<ContentBlock> {
    vec![
        Header("Data Sources"),
        Paragraph(
            "The data used in this study comes from multiple sources, including the TomTom Traffic APIs, \
             Miami-Dade County (MDC) datasets, and the Florida Department of Transportation (FDOT). The table \
             below outlines the merged features, record count, and source for each dataset:",
        ),
        Table(data_sources_table()),
    ]
}

pub(super) fn tools() -> Vec<ContentBlock> {
    vec![
        Header("Tools & Implementation"),
        Subheader("Tools"),
        Paragraph(
            "All preprocessing, model building and model testing for this project were ran using Python 3.0 on \
             Jupyter Notebook on a MacBook Air, running on a 1.1 GHz Quad-Core Intel Core i5 processor with 16 \
             GB of RAM and 208 GB hard drive. The following python libraries and data tools were utilized for \
             preprocessing, exploratory data analysis, and model building and testing:",
        ),
        ContentBlock::bullets(&[
            "Geopandas",
            "NumPy",
            "Matplotlib",
            "Pandas",
            "QGIS",
            "Scikit-learn",
            "Seaborn",
            "Shapely",
        ]),
        Subheader("Implementation"),
        Paragraph(
            "The experimental approach is performed in four phases as shown in the following sections of the \
             report.",
        ),
        Subheader("Phase One: Data Collection and Preprocessing"),
        ContentBlock::bullets(&[
            "Collected initial incident data via TomTom API call.",
            "Appended traffic flow speeds and travel times at the coordinates of the incident.",
            "Spatially merged API data with GeoJSON data from the MDC and FDOT site using QGIS software.",
            "Cleaned and transformed data to ensure completeness and consistency.",
        ]),
        Subheader("Phase Two: Exploratory Data Analysis"),
        ContentBlock::bullets(&[
            "Created correlation matrix to visualize relationships between features.",
            "Analyzed relationships between incident count and other features such as traffic lights, bus \
             routes, and annual average daily traffic count.",
        ]),
        Subheader("Phase Three: Model Building and Tuning"),
        ContentBlock::bullets(&[
            "Built classification models (Decision Tree, Random Forest, XGBoost).",
            "Applied Synthetic Minority Over-sampling Technique (SMOTE) for class balancing.",
            "Performed hyperparameter tuning to optimize model performance.",
        ]),
        Subheader("Phase Four: Results Analysis and Feature Importance"),
        ContentBlock::bullets(&[
            "Analyzed model performance and evaluated feature importance to gain insights into predictive power \
             and interpretability.",
        ]),
    ]
}

pub(super) fn results() -> Vec<ContentBlock> {
    vec![
        Header("Results"),
        Subheader("Model Performance Analysis"),
        Paragraph(
            "The XGBoost model performed the best among the three models in terms of precision-recall \
             trade-off, with the highest PR AUC score of 0.99260.",
        ),
        Subheader("Feature Importance Analysis"),
        Paragraph(
            "Key factors contributing to traffic congestion and accidents were identified. Areas with a higher \
             density of bus routes tend to have a lower incidence of traffic-related incidents, highlighting the \
             critical role of public transportation in mitigating traffic congestion and enhancing urban safety.",
        ),
        Subheader("Model Results"),
        Paragraph("The table below shows the accuracies across training and test sets for different models:"),
        Table(model_results_table()),
        Subheader("Confusion Matrix for Random Forest Model"),
        Paragraph(
            "The confusion matrix for the Random Forest model demonstrates strong predictive performance, with a \
             high number of true positives (1072) and true negatives (155), showcasing the model's \
             classification reliability.",
        ),
    ]
}

pub(super) fn conclusions() -> Vec<ContentBlock> {
    vec![
        Header("Contributions & Conclusions"),
        Subheader("Contributions"),
        ContentBlock::bullets(&[
            "Sharief: Data collection & integration, preprocessing, exploratory data analysis, class balancing, \
             stratified data split.",
            "Jonathan: Chose and built classification models, tuned hyperparameters, analyzed model \
             performance, refined models.",
        ]),
        Subheader("Conclusions"),
        ContentBlock::bullets(&[
            "Areas with a higher density of bus routes tend to have a lower incidence of traffic-related \
             incidents.",
            "Public transportation plays a crucial role in mitigating traffic congestion and enhancing urban \
             safety.",
            "The XGBoost model was identified as the most effective in predicting traffic incidents based on \
             various factors.",
            "Data-driven insights can significantly improve urban planning and policy development.",
        ]),
        Subheader("Bibliography"),
        ContentBlock::bullets(&[
            "David Schrank, Bill Eisele, and Tim Lomax. \"2019 Urban Mobility Report.\" Texas A&M \
             Transportation Institute, 2019.",
            "Litman, Todd. \"Evaluating Public Transportation Health Benefits.\" Victoria Transport Policy \
             Institute, 2010.",
            "\"Public Transportation Accessibility and Mobility.\" SpringerLink, Springer.",
            "\"Improving Public Transportation Efficiency Through Accurate Bus Passenger Demand.\" SpringerLink, \
             Springer.",
            "\"The Complexity of Integrating Multiple Traffic Data Sources.\" SpringerLink, Springer.",
        ]),
    ]
}
